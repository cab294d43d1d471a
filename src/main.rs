use{
    std::{
        time::Instant
    },
    structopt::StructOpt,
    indicatif::*
};

pub mod ua_model;
pub mod multiplex;
pub mod misc_types;
use crate::misc_types::*;
pub mod stats_methods;
pub mod json_parsing;
pub mod trajectory;
pub mod scan_alpha;


pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let start_time = Instant::now();
    let opt = CmdOption::from_args();
    match opt{
        CmdOption::Trajectory(o) => o.execute(),
        CmdOption::ScanAlpha(o) => o.execute(),
        CmdOption::PropTest(o) => o.execute()
    }
    println!("Execution took {}",humantime::format_duration(start_time.elapsed()))

}

pub fn indication_bar(len: u64) -> ProgressBar
{
        // for indication on when it is finished
        let bar = ProgressBar::new(len);
        bar.set_style(ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise} - {eta_precise}] {wide_bar}"));
        bar
}


#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Simulations for the coupled SIR ~ UA model on multiplex networks!")]
pub enum CmdOption
{
    Trajectory(trajectory::Trajectory),
    ScanAlpha(scan_alpha::ScanAlpha),
    PropTest(prop_test::PropTest)

}
