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
///Check a single propagation is working
pub struct PropTest{
    #[structopt(long)]
    json: Option<String>,

    #[structopt(long)]
    num_threads:Option<NonZeroUsize>
}

impl PropTest{
    pub fn parse(&self) -> (PropTestParams, Value){
        parse(self.json.as_ref())
    }
    pub fn execute(&self){
        let (opt, json) = self.parse();
        run_simulation(opt,json,self.num_threads)
    }
}


#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PropTestParams{
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
    pub sir_seed: u64,
}

impl Default for PropTestParams{
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
            sir_seed: DEFAULT_SIR_SEED
        }
    }
}
