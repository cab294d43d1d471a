use net_ensembles::*;

use{
    rand::{
        Rng,
        SeedableRng,
        seq::SliceRandom,
        distributions::{Uniform, Distribution}
    },
    rand_pcg::Pcg64,
    super::*,
    crate::multiplex::CoupledGraphs
};

/// The coupled SIR ~ UA model. Owns both state carrying layer graphs
/// plus the rng used for seeding and the weighted coin flips.
#[derive(Clone)]
pub struct CoupledModel{
    contagion: ContagionGraph,
    awareness: AwarenessGraph,
    compartments: Compartments,
    rng: Pcg64,
    n: usize
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EpochCounts{
    pub s: u32,
    pub i: u32,
    pub r: u32,
    pub u: u32,
    pub a: u32
}

/// Global per-epoch counts of one simulation run,
/// entry 0 being the seeded initial state
#[derive(Clone, Debug)]
pub struct SimulationLog{
    pub counts: Vec<EpochCounts>
}

impl SimulationLog{
    pub fn infected_curve(&self) -> Vec<u32>
    {
        self.counts.iter().map(|c| c.i).collect()
    }

    pub fn aware_curve(&self) -> Vec<u32>
    {
        self.counts.iter().map(|c| c.a).collect()
    }

    pub fn max_infected(&self) -> u32
    {
        self.counts
            .iter()
            .map(|c| c.i)
            .max()
            .unwrap_or(0)
    }

    pub fn final_counts(&self) -> EpochCounts
    {
        *self.counts.last().expect("empty simulation log")
    }
}

impl CoupledModel{
    pub fn new(graphs: &CoupledGraphs, compartments: Compartments, sir_seed: u64) -> Self
    {
        let n = graphs.contagion.vertex_count();
        assert_eq!(
            n,
            graphs.awareness.vertex_count(),
            "layers of a multiplex network must share the actor set"
        );
        Self{
            contagion: graphs.contagion.clone(),
            awareness: graphs.awareness.clone(),
            compartments,
            rng: Pcg64::seed_from_u64(sir_seed),
            n
        }
    }

    pub fn reseed_sir_rng(&mut self, rng: &mut Pcg64)
    {
        self.rng = Pcg64::from_rng(rng).unwrap();
    }

    pub fn set_alpha(&mut self, alpha: f64)
    {
        probability_check(alpha, "alpha");
        self.compartments.alpha = alpha;
    }

    pub fn n(&self) -> usize
    {
        self.n
    }

    pub fn compartments(&self) -> &Compartments
    {
        &self.compartments
    }

    /// Everyone back to S/U, then random seed selection: an independent
    /// random ranking per process, the first `budget` agents of each
    /// ranking start out infected resp. aware
    pub fn reset_and_seed(&mut self)
    {
        for agent in 0..self.n{
            *self.contagion.at_mut(agent) = ContagionState::Susceptible;
            *self.awareness.at_mut(agent) = AwarenessState::Unaware;
        }

        let budget = self.compartments.seeding_budget(self.n);
        let mut ranking: Vec<usize> = (0..self.n).collect();

        ranking.shuffle(&mut self.rng);
        for &agent in &ranking[..budget.ill]{
            *self.contagion.at_mut(agent) = ContagionState::Infected;
        }

        ranking.shuffle(&mut self.rng);
        for &agent in &ranking[..budget.aware]{
            *self.awareness.at_mut(agent) = AwarenessState::Aware;
        }
    }

    // uniform sample from [0,1) strictly below the weight:
    // weight 0 never fires, weight 1 always does
    fn flip_a_coin(rng: &mut Pcg64, weight: f64) -> bool
    {
        let uniform = Uniform::new(0.0, 1.0);
        uniform.sample(rng) < weight
    }

    /// One evaluation of an agent on the contagion layer.
    /// I -> R is spontaneous, S -> I needs an infected neighbour in
    /// this layer and is weighted by the agents awareness state.
    pub fn evaluate_contagion_agent(&mut self, agent: usize) -> ContagionState
    {
        let current = *self.contagion.at(agent);
        let co_state = *self.awareness.at(agent);
        let (target, weight) = match self.compartments.contagion_transition(current, co_state){
            None => return current,
            Some(transition) => transition
        };

        if current.inf_check(){
            if Self::flip_a_coin(&mut self.rng, weight){
                return target;
            }
            return current;
        }

        for (_, neighbour) in self.contagion.contained_iter_neighbors_with_index(agent){
            if *neighbour == target && Self::flip_a_coin(&mut self.rng, weight){
                return target;
            }
        }
        current
    }

    /// One evaluation of an agent on the awareness layer.
    /// U -> A needs an aware neighbour in this layer and is weighted
    /// by the agents contagion state.
    pub fn evaluate_awareness_agent(&mut self, agent: usize) -> AwarenessState
    {
        let current = *self.awareness.at(agent);
        let co_state = *self.contagion.at(agent);
        let (target, weight) = match self.compartments.awareness_transition(current, co_state){
            None => return current,
            Some(transition) => transition
        };

        for (_, neighbour) in self.awareness.contained_iter_neighbors_with_index(agent){
            if *neighbour == target && Self::flip_a_coin(&mut self.rng, weight){
                return target;
            }
        }
        current
    }

    /// One epoch. Contagion layer first, then awareness, both sweeping the
    /// agents in index order with immediate write back, so agents evaluated
    /// later in the sweep already see the earlier updates.
    pub fn network_evaluation_step(&mut self)
    {
        for agent in 0..self.n{
            let new_state = self.evaluate_contagion_agent(agent);
            *self.contagion.at_mut(agent) = new_state;
        }
        for agent in 0..self.n{
            let new_state = self.evaluate_awareness_agent(agent);
            *self.awareness.at_mut(agent) = new_state;
        }
    }

    pub fn count_states(&self) -> EpochCounts
    {
        let mut counts = EpochCounts::default();
        for state in self.contagion.contained_iter(){
            match state{
                ContagionState::Susceptible => counts.s += 1,
                ContagionState::Infected => counts.i += 1,
                ContagionState::Removed => counts.r += 1
            }
        }
        for state in self.awareness.contained_iter(){
            match state{
                AwarenessState::Unaware => counts.u += 1,
                AwarenessState::Aware => counts.a += 1
            }
        }
        counts
    }

    /// Fixed number of epochs, no early break: the repeated runs have to
    /// be of equal length for the trajectory aggregation
    pub fn propagate(&mut self, epochs: usize) -> SimulationLog
    {
        self.reset_and_seed();
        let mut counts = Vec::with_capacity(epochs + 1);
        counts.push(self.count_states());
        for _ in 0..epochs{
            self.network_evaluation_step();
            counts.push(self.count_states());
        }
        SimulationLog{
            counts
        }
    }

    /// Called C in the scan output
    pub fn calculate_ever_infected(&self) -> usize
    {
        self.contagion.contained_iter()
            .filter(|&v| v.is_or_was_infected())
            .count()
    }
}


#[cfg(test)]
mod tests{
    use super::*;
    use crate::multiplex::MultiplexNetwork;

    // a 0-1-2-3 chain on the contagion layer,
    // a 0-1-2-3 chain on the awareness layer as well
    const CHAIN: &str = "\
#LAYERS
contagion,UNDIRECTED
awareness,UNDIRECTED
#ACTORS
a0
a1
a2
a3
#EDGES
a0,a1,contagion
a1,a2,contagion
a2,a3,contagion
a0,a1,awareness
a1,a2,awareness
a2,a3,awareness
";

    fn chain_graphs() -> CoupledGraphs
    {
        MultiplexNetwork::from_reader(CHAIN.as_bytes())
            .unwrap()
            .coupled_graphs("contagion", "awareness")
    }

    fn model(compartments: Compartments, seed: u64) -> CoupledModel
    {
        CoupledModel::new(&chain_graphs(), compartments, seed)
    }

    #[test]
    fn seeding_matches_budget()
    {
        let compartments = Compartments::new(0.5, 0.1, 0.1, 0.1, 0.1, 25, 50);
        let mut model = model(compartments, 123);
        model.reset_and_seed();
        let counts = model.count_states();
        assert_eq!(counts.i, 1);
        assert_eq!(counts.s, 3);
        assert_eq!(counts.a, 2);
        assert_eq!(counts.u, 2);
    }

    #[test]
    fn certain_infection_sweeps_the_chain()
    {
        // alpha = 1, no recovery, awareness frozen
        let compartments = Compartments::new(1.0, 1.0, 0.0, 0.0, 0.0, 25, 0);
        let mut model = model(compartments, 4897);
        let log = model.propagate(4);
        let last = log.final_counts();
        assert_eq!(last.i, 4);
        assert_eq!(last.r, 0);
        assert_eq!(last.u, 4);
        assert_eq!(model.calculate_ever_infected(), 4);
    }

    #[test]
    fn zero_alpha_never_spreads()
    {
        let compartments = Compartments::new(0.0, 0.0, 0.0, 0.0, 0.0, 25, 0);
        let mut model = model(compartments, 4897);
        let log = model.propagate(10);
        assert_eq!(log.final_counts().i, 1);
        assert_eq!(log.max_infected(), 1);
    }

    #[test]
    fn certain_recovery_after_one_epoch()
    {
        let compartments = Compartments::new(0.0, 0.0, 1.0, 0.0, 0.0, 25, 0);
        let mut model = model(compartments, 555);
        let log = model.propagate(1);
        let last = log.final_counts();
        assert_eq!(last.i, 0);
        assert_eq!(last.r, 1);
        // removal is absorbing
        let log = model.propagate(5);
        assert_eq!(log.final_counts().r, 1);
    }

    #[test]
    fn certain_awareness_sweeps_the_chain()
    {
        let compartments = Compartments::new(0.0, 0.0, 0.0, 1.0, 1.0, 0, 25);
        let mut model = model(compartments, 987);
        let log = model.propagate(4);
        assert_eq!(log.final_counts().a, 4);
        assert_eq!(log.final_counts().s, 4);
    }

    #[test]
    fn fresh_infection_uses_delta_within_the_same_epoch()
    {
        // two actors, connected in both layers. gamma = 0, delta = 1:
        // an agent can only become aware while infected. Since the
        // contagion sweep runs first with immediate write back, an agent
        // infected in epoch t already uses delta in the awareness sweep
        // of the very same epoch.
        let net = "\
#LAYERS
contagion,UNDIRECTED
awareness,UNDIRECTED
#ACTORS
a0
a1
#EDGES
a0,a1,contagion
a0,a1,awareness
";
        let graphs = MultiplexNetwork::from_reader(net.as_bytes())
            .unwrap()
            .coupled_graphs("contagion", "awareness");
        let compartments = Compartments::new(1.0, 1.0, 0.0, 0.0, 1.0, 0, 0);
        let mut model = CoupledModel::new(&graphs, compartments, 42);

        // empty seeding budgets, place the seeds by hand: a0 is I·A
        model.reset_and_seed();
        *model.contagion.at_mut(0) = ContagionState::Infected;
        *model.awareness.at_mut(0) = AwarenessState::Aware;

        model.network_evaluation_step();
        assert_eq!(*model.contagion.at(1), ContagionState::Infected);
        assert_eq!(*model.awareness.at(1), AwarenessState::Aware);

        let counts = model.count_states();
        assert_eq!(counts.i, 2);
        assert_eq!(counts.a, 2);
    }

    #[test]
    fn same_seed_same_trajectory()
    {
        let compartments = Compartments::new(0.4, 0.1, 0.2, 0.3, 0.6, 25, 25);
        let mut first = model(compartments, 31415);
        let mut second = model(compartments, 31415);
        let log_a = first.propagate(20);
        let log_b = second.propagate(20);
        assert_eq!(log_a.counts, log_b.counts);
    }

    #[test]
    #[should_panic(expected = "not a probability")]
    fn set_alpha_rejects_weights_above_one()
    {
        let compartments = Compartments::new(0.2, 0.1, 0.1, 0.1, 0.2, 25, 25);
        let mut model = model(compartments, 12);
        model.set_alpha(1.5);
    }

    #[test]
    fn isolated_agent_only_recovers()
    {
        // single actor with edges nowhere: spontaneous recovery still works
        let net = "\
#LAYERS
contagion,UNDIRECTED
awareness,UNDIRECTED
#ACTORS
lonely
";
        let graphs = MultiplexNetwork::from_reader(net.as_bytes())
            .unwrap()
            .coupled_graphs("contagion", "awareness");
        let compartments = Compartments::new(1.0, 1.0, 1.0, 1.0, 1.0, 100, 0);
        let mut model = CoupledModel::new(&graphs, compartments, 7);
        let log = model.propagate(3);
        let last = log.final_counts();
        assert_eq!(last.r, 1);
        // no aware neighbour anywhere, so the agent stays unaware
        assert_eq!(last.u, 1);
    }

    #[test]
    fn epoch_zero_is_the_seeded_state()
    {
        let compartments = Compartments::new(0.2, 0.1, 0.1, 0.1, 0.2, 50, 25);
        let mut model = model(compartments, 8);
        let log = model.propagate(6);
        assert_eq!(log.counts.len(), 7);
        assert_eq!(log.counts[0].i, 2);
        assert_eq!(log.counts[0].a, 1);
        assert_eq!(log.counts[0].r, 0);
    }
}
