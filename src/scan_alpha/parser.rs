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
///Scan the infection weight alpha, recording the chosen contagion
///measure and the final number of aware agents per grid point
pub struct ScanAlpha{
    #[structopt(long)]
    json: Option<String>,

    #[structopt(long)]
    num_threads:Option<NonZeroUsize>
}

impl ScanAlpha{
    pub fn parse(&self) -> (ScanAlphaParams, Value){
        parse(self.json.as_ref())
    }
    pub fn execute(&self){
        let (opt, json) = self.parse();
        run_simulation(opt,json,self.num_threads)
    }
}


#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScanAlphaParams{
    pub mpx_file: String,
    pub contagion_layer: String,
    pub awareness_layer: String,
    pub alpha_range: F64RangeBuilder,
    pub alpha_prime: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
    pub ill_seeds: usize,
    pub aware_seeds: usize,
    pub epochs: usize,
    pub samples_per_step: u64,
    pub sir_seed: u64,
    pub fraction: bool,
    pub measure: MeasureType,
}

impl Default for ScanAlphaParams{
    fn default() -> Self{
        let alpha_range_def = F64RangeBuilder{
            start: 0.0,
            end: 1.0,
            steps: NonZeroUsize::new(20).unwrap()
        };
        Self{
            mpx_file: DEFAULT_MPX_FILE.to_owned(),
            contagion_layer: DEFAULT_CONTAGION_LAYER.to_owned(),
            awareness_layer: DEFAULT_AWARENESS_LAYER.to_owned(),
            alpha_range: alpha_range_def,
            alpha_prime: DEFAULT_ALPHA_PRIME,
            beta: DEFAULT_BETA,
            gamma: DEFAULT_GAMMA,
            delta: DEFAULT_DELTA,
            ill_seeds: DEFAULT_ILL_SEEDS,
            aware_seeds: DEFAULT_AWARE_SEEDS,
            epochs: DEFAULT_EPOCHS,
            samples_per_step: DEFAULT_SAMPLES_PER_STEP,
            sir_seed: DEFAULT_SIR_SEED,
            fraction: true,
            measure: MeasureType::C,
        }
    }
}

impl ScanAlphaParams{
    pub fn name<E>(&self, file_ending:E , num_threads:Option<NonZeroUsize>) -> String where E:Display{
        let k = match num_threads{
            None => "".to_owned(),
            Some(v) => format!("k{}",v)
        };
        format!(
            "ver{}UaAlphaScan_{}_{}a{}-{}_{}ap{}b{}g{}d{}_ill{}aw{}_E{}_SamStep{}_SS{}{}.{}",
            crate::VERSION,
            mpx_stem(&self.mpx_file),
            self.measure.name(),
            self.alpha_range.start,
            self.alpha_range.end,
            self.alpha_range.steps,
            self.alpha_prime,
            self.beta,
            self.gamma,
            self.delta,
            self.ill_seeds,
            self.aware_seeds,
            self.epochs,
            self.samples_per_step,
            self.sir_seed,
            k,
            file_ending
        )
    }
}
