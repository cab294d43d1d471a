use{
    super::*,
    crate::trajectory::*,
    crate::scan_alpha::*,
    crate::prop_test::*
};

/// Everything the model itself needs, collected from the
/// parameter sets of the different subcommands
#[derive(Debug, Clone)]
pub struct SirUaOptions{
    pub alpha: f64,
    pub alpha_prime: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
    pub ill_seeds: usize,
    pub aware_seeds: usize,
    pub sir_seed: u64
}

impl SirUaOptions{
    pub fn from_trajectory_param(param: &TrajectoryParams) -> Self
    {
        Self{
            alpha: param.alpha,
            alpha_prime: param.alpha_prime,
            beta: param.beta,
            gamma: param.gamma,
            delta: param.delta,
            ill_seeds: param.ill_seeds,
            aware_seeds: param.aware_seeds,
            sir_seed: param.sir_seed
        }
    }

    pub fn from_scan_alpha_param(param: &ScanAlphaParams) -> Self
    {
        Self{
            alpha: param.alpha_range.start,
            alpha_prime: param.alpha_prime,
            beta: param.beta,
            gamma: param.gamma,
            delta: param.delta,
            ill_seeds: param.ill_seeds,
            aware_seeds: param.aware_seeds,
            sir_seed: param.sir_seed
        }
    }

    pub fn from_prop_test_param(param: &PropTestParams) -> Self
    {
        Self{
            alpha: param.alpha,
            alpha_prime: param.alpha_prime,
            beta: param.beta,
            gamma: param.gamma,
            delta: param.delta,
            ill_seeds: param.ill_seeds,
            aware_seeds: param.aware_seeds,
            sir_seed: param.sir_seed
        }
    }

    pub fn compartments(&self) -> Compartments
    {
        Compartments::new(
            self.alpha,
            self.alpha_prime,
            self.beta,
            self.gamma,
            self.delta,
            self.ill_seeds,
            self.aware_seeds
        )
    }
}
