use std::{ops::DerefMut, io::Write};
use indicatif::ParallelProgressIterator;

use{
    super::*,
    crate::{ua_model::*, stats_methods::*, json_parsing::*, trajectory::load_coupled_graphs},
    serde_json::Value,
    std::{num::*, sync::Mutex, fs::File, io::BufWriter},
    rand_pcg::Pcg64,
    rand::SeedableRng,
    rayon::prelude::*,
};


pub fn run_simulation(param: ScanAlphaParams, json: Value, num_threads: Option<NonZeroUsize>){
    let graphs = load_coupled_graphs(
        &param.mpx_file,
        &param.contagion_layer,
        &param.awareness_layer
    );
    let opt = SirUaOptions::from_scan_alpha_param(&param);
    let model = CoupledModel::new(&graphs, opt.compartments(), param.sir_seed);

    let alpha_range: Vec<f64> = param.alpha_range.iter().collect();

    let k = num_threads.unwrap_or_else(|| NonZeroUsize::new(1).unwrap());
    rayon::ThreadPoolBuilder::new().num_threads(k.get()).build_global().unwrap();

    let mut rng = Pcg64::seed_from_u64(param.sir_seed);

    let container: Vec<_> = (0..k.get()).map(
        |_|
        {
            let mut model = model.clone();
            model.reseed_sir_rng(&mut rng);
            Mutex::new(model)
        }
    ).collect();

    let end = alpha_range.len()/k.get();
    let bar = crate::indication_bar(alpha_range.len() as u64);

    let iterator = (0..=end)
        .into_par_iter()
        .flat_map(
                |i|
                {
                    let start = i*container.len();
                    container.par_iter()
                        .zip(alpha_range[ start..].par_iter())
                }
            );

    let system_size_fraction = if param.fraction{
        Some(model.n() as f64)
    }else{
        None
    };

    let y: Vec<ScanPoint> = iterator
        .progress_with(bar)
        .map(
            |(container, &alpha)|
            {
                let mut lock = container.lock()
                    .expect("unable to lock");
                let model = lock.deref_mut();

                model.set_alpha(alpha);

                let mut measure_vals = Vec::with_capacity(param.samples_per_step as usize);
                let mut aware_vals = Vec::with_capacity(param.samples_per_step as usize);
                for _ in 0..param.samples_per_step
                {
                    let log = model.propagate(param.epochs);
                    let res = if param.measure.is_c()
                    {
                        model.calculate_ever_infected() as u32
                    } else {
                        log.max_infected()
                    };
                    measure_vals.push(res);
                    aware_vals.push(log.final_counts().a);
                }

                ScanPoint{
                    measure: MyVariance::from_slice(&measure_vals, system_size_fraction),
                    aware: MyVariance::from_slice(&aware_vals, system_size_fraction)
                }
            }
        ).collect();

    let samples = ScanSamples{
        alpha: alpha_range,
        points: y
    };
    let name = param.name("dat", num_threads);
    println!("Creating: {}", &name);
    let file = File::create(name)
        .expect("unable to create file");
    let mut buf = BufWriter::new(file);
    write_json(&mut buf, &json);
    samples.write(buf).unwrap()
}


pub struct ScanPoint{
    pub measure: MyVariance,
    pub aware: MyVariance
}

pub struct ScanSamples{
    alpha: Vec<f64>,
    points: Vec<ScanPoint>
}

impl ScanSamples{
    fn write<W>(&self, mut writer: W) -> std::io::Result<()>
    where W: Write
    {
        writeln!(writer, "#alpha mean variance meanA varianceA")?;

        for (alpha, point) in self.alpha.iter().zip(self.points.iter())
        {
            writeln!(
                writer,
                "{:e} {:e} {:e} {:e} {:e}",
                alpha,
                point.measure.mean(),
                point.measure.variance_of_mean(),
                point.aware.mean(),
                point.aware.variance_of_mean()
            )?
        }
        Ok(())
    }
}
