use{
    serde::{Serialize, Deserialize},
    super::*
};

/// The coupled transition table of the two processes.
///
/// ```text
/// S·U ──> I·U ──> R·U
///  |       |       |
///  v       v       v
/// S·A ──> I·A ──> R·A
/// ```
///
/// Horizontal moves happen on the contagion layer, vertical moves on the
/// awareness layer. Only I -> R is spontaneous, every other transition
/// needs a neighbour that already carries the target state.
#[derive(Serialize, Deserialize, Clone, Debug, Copy)]
pub struct Compartments{
    // S -> I for unaware agents
    pub alpha: f64,
    // S -> I for aware agents
    pub alpha_prime: f64,
    // I -> R, independent of awareness
    pub beta: f64,
    // U -> A for susceptible and removed agents
    pub gamma: f64,
    // U -> A for infected agents
    pub delta: f64,
    // initial percentage of infected agents
    pub ill_seeds: usize,
    // initial percentage of aware agents
    pub aware_seeds: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedingBudget{
    pub ill: usize,
    pub aware: usize
}

pub fn probability_check(val: f64, name: &str)
{
    assert!(
        (0.0..=1.0).contains(&val),
        "transition weight {name}={val} is not a probability"
    );
}

impl Compartments{
    pub fn new(
        alpha: f64,
        alpha_prime: f64,
        beta: f64,
        gamma: f64,
        delta: f64,
        ill_seeds: usize,
        aware_seeds: usize
    ) -> Self
    {
        probability_check(alpha, "alpha");
        probability_check(alpha_prime, "alpha_prime");
        probability_check(beta, "beta");
        probability_check(gamma, "gamma");
        probability_check(delta, "delta");
        assert!(ill_seeds <= 100, "ill_seeds is a percentage");
        assert!(aware_seeds <= 100, "aware_seeds is a percentage");
        Self{
            alpha,
            alpha_prime,
            beta,
            gamma,
            delta,
            ill_seeds,
            aware_seeds
        }
    }

    /// Possible transition of the contagion process, given the agents
    /// awareness state. None means the state is absorbing on this layer.
    pub fn contagion_transition(
        &self,
        current: ContagionState,
        co_state: AwarenessState
    ) -> Option<(ContagionState, f64)>
    {
        match current{
            ContagionState::Susceptible => {
                let weight = match co_state{
                    AwarenessState::Unaware => self.alpha,
                    AwarenessState::Aware => self.alpha_prime
                };
                Some((ContagionState::Infected, weight))
            },
            ContagionState::Infected => Some((ContagionState::Removed, self.beta)),
            ContagionState::Removed => None
        }
    }

    /// Possible transition of the awareness process, given the agents
    /// contagion state.
    pub fn awareness_transition(
        &self,
        current: AwarenessState,
        co_state: ContagionState
    ) -> Option<(AwarenessState, f64)>
    {
        match current{
            AwarenessState::Unaware => {
                let weight = match co_state{
                    ContagionState::Susceptible => self.gamma,
                    ContagionState::Infected => self.delta,
                    ContagionState::Removed => self.gamma
                };
                Some((AwarenessState::Aware, weight))
            },
            AwarenessState::Aware => None
        }
    }

    /// Number of initially infected and aware agents. Integer truncation,
    /// like the budget computation of the original framework.
    pub fn seeding_budget(&self, n: usize) -> SeedingBudget
    {
        SeedingBudget{
            ill: n * self.ill_seeds / 100,
            aware: n * self.aware_seeds / 100
        }
    }
}


#[cfg(test)]
mod tests{
    use super::*;

    fn table() -> Compartments
    {
        Compartments::new(0.25, 0.05, 0.14, 0.2, 0.5, 10, 5)
    }

    #[test]
    fn susceptible_weight_depends_on_awareness()
    {
        let cmp = table();
        let (target, weight) = cmp
            .contagion_transition(ContagionState::Susceptible, AwarenessState::Unaware)
            .unwrap();
        assert_eq!(target, ContagionState::Infected);
        assert_eq!(weight, 0.25);

        let (_, weight) = cmp
            .contagion_transition(ContagionState::Susceptible, AwarenessState::Aware)
            .unwrap();
        assert_eq!(weight, 0.05);
    }

    #[test]
    fn recovery_ignores_awareness()
    {
        let cmp = table();
        for co_state in [AwarenessState::Unaware, AwarenessState::Aware]{
            let (target, weight) = cmp
                .contagion_transition(ContagionState::Infected, co_state)
                .unwrap();
            assert_eq!(target, ContagionState::Removed);
            assert_eq!(weight, 0.14);
        }
    }

    #[test]
    fn awareness_weight_depends_on_contagion()
    {
        let cmp = table();
        let expect = [
            (ContagionState::Susceptible, 0.2),
            (ContagionState::Infected, 0.5),
            (ContagionState::Removed, 0.2)
        ];
        for (co_state, weight) in expect{
            let (target, w) = cmp
                .awareness_transition(AwarenessState::Unaware, co_state)
                .unwrap();
            assert_eq!(target, AwarenessState::Aware);
            assert_eq!(w, weight);
        }
    }

    #[test]
    fn absorbing_states_have_no_transition()
    {
        let cmp = table();
        assert!(
            cmp.contagion_transition(ContagionState::Removed, AwarenessState::Unaware)
                .is_none()
        );
        assert!(
            cmp.awareness_transition(AwarenessState::Aware, ContagionState::Infected)
                .is_none()
        );
    }

    #[test]
    fn budget_truncates()
    {
        let cmp = table();
        let budget = cmp.seeding_budget(61);
        assert_eq!(budget, SeedingBudget{ill: 6, aware: 3});
        let budget = cmp.seeding_budget(0);
        assert_eq!(budget, SeedingBudget{ill: 0, aware: 0});
    }

    #[test]
    #[should_panic]
    fn rejects_invalid_probability()
    {
        Compartments::new(1.3, 0.05, 0.14, 0.2, 0.5, 10, 5);
    }
}
