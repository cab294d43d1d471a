use{
    serde::{Serialize, Deserialize},

    std::{
        num::*,
    },
};

pub const DEFAULT_MPX_FILE: &str = "aucs.mpx";
pub const DEFAULT_CONTAGION_LAYER: &str = "lunch";
pub const DEFAULT_AWARENESS_LAYER: &str = "facebook";

pub const DEFAULT_ALPHA: f64 = 0.25;
pub const DEFAULT_ALPHA_PRIME: f64 = 0.05;
pub const DEFAULT_BETA: f64 = 0.14;
pub const DEFAULT_GAMMA: f64 = 0.2;
pub const DEFAULT_DELTA: f64 = 0.5;
// initial percentages of infected and aware agents
pub const DEFAULT_ILL_SEEDS: usize = 5;
pub const DEFAULT_AWARE_SEEDS: usize = 5;

pub const DEFAULT_EPOCHS: usize = 50;
pub const DEFAULT_RUNS: u64 = 500;
pub const DEFAULT_SAMPLES_PER_STEP: u64 = 2000;
pub const DEFAULT_SIR_SEED: u64 = 1489264107025;


#[derive(Serialize, Deserialize, Clone, Debug, Copy)]
pub enum MeasureType {
    // ever infected
    C,
    // max infected
    M,
}

impl MeasureType{
    pub fn name(self) -> &'static str
    {
        match self{
            Self::C => "C",
            Self::M => "M",
        }
    }

    pub fn is_c(self) -> bool
    {
        matches!(self, Self::C)
    }
}


#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct F64RangeBuilder
{
    pub start: f64,
    pub end: f64,
    pub steps: NonZeroUsize
}

impl F64RangeBuilder{
    /// evenly spaced grid, both ends included
    pub fn iter(&self) -> impl Iterator<Item=f64> + '_
    {
        let steps = self.steps.get();
        let delta = if steps <= 1 {
            0.0
        } else {
            (self.end - self.start) / (steps - 1) as f64
        };
        let start = self.start;
        (0..steps).map(
            move |i| start + delta * i as f64
        )
    }

    pub fn len(&self) -> usize
    {
        self.steps.get()
    }

    pub fn is_empty(&self) -> bool
    {
        false
    }
}

/// file stem of the network file, used in output names
pub fn mpx_stem(path: &str) -> String
{
    std::path::Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "net".to_owned())
}
