use std::fmt::Display;

use{
    super::*,
    structopt::StructOpt,
    std::num::*,
    crate::json_parsing::*,
    serde::{Serialize, Deserialize},
    serde_json::Value,

    crate::misc_types::*,
};



#[derive(Debug, StructOpt, Clone)]
///Repeated simulations, aggregated into mean/std trajectories
pub struct Trajectory{
    #[structopt(long)]
    json: Option<String>,

    #[structopt(long)]
    num_threads:Option<NonZeroUsize>
}

impl Trajectory{
    pub fn parse(&self) -> (TrajectoryParams, Value){
        parse(self.json.as_ref())
    }
    pub fn execute(&self){
        let (opt, json) = self.parse();
        run_simulation(opt,json,self.num_threads)
    }
}


#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrajectoryParams{
    pub mpx_file: String,
    pub contagion_layer: String,
    pub awareness_layer: String,
    pub alpha: f64,
    pub alpha_prime: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
    pub ill_seeds: usize,
    pub aware_seeds: usize,
    pub epochs: usize,
    pub runs: u64,
    pub sir_seed: u64,
    pub fraction: bool,
    pub save_curves: bool,
}

impl Default for TrajectoryParams{
    fn default() -> Self{
        Self{
            mpx_file: DEFAULT_MPX_FILE.to_owned(),
            contagion_layer: DEFAULT_CONTAGION_LAYER.to_owned(),
            awareness_layer: DEFAULT_AWARENESS_LAYER.to_owned(),
            alpha: DEFAULT_ALPHA,
            alpha_prime: DEFAULT_ALPHA_PRIME,
            beta: DEFAULT_BETA,
            gamma: DEFAULT_GAMMA,
            delta: DEFAULT_DELTA,
            ill_seeds: DEFAULT_ILL_SEEDS,
            aware_seeds: DEFAULT_AWARE_SEEDS,
            epochs: DEFAULT_EPOCHS,
            runs: DEFAULT_RUNS,
            sir_seed: DEFAULT_SIR_SEED,
            fraction: false,
            save_curves: false,
        }
    }
}

impl TrajectoryParams{
    pub fn base_name(&self, num_threads:Option<NonZeroUsize>) -> String{
        let k = match num_threads{
            None => "".to_owned(),
            Some(v) => format!("k{}",v)
        };
        format!(
            "ver{}UaTraj_{}_a{}ap{}b{}g{}d{}_ill{}aw{}_E{}_R{}_SS{}{}",
            crate::VERSION,
            mpx_stem(&self.mpx_file),
            self.alpha,
            self.alpha_prime,
            self.beta,
            self.gamma,
            self.delta,
            self.ill_seeds,
            self.aware_seeds,
            self.epochs,
            self.runs,
            self.sir_seed,
            k
        )
    }

    pub fn name<E>(&self, file_ending:E , num_threads:Option<NonZeroUsize>) -> String where E:Display{
        format!(
            "{}.{}",
            self.base_name(num_threads),
            file_ending
        )
    }
}
