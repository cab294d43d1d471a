use std::io::Write;
use indicatif::ParallelProgressIterator;

use{
    super::*,
    crate::{ua_model::*, multiplex::*, stats_methods::*, json_parsing::*},
    serde_json::Value,
    std::{num::*, fs::File, io::BufWriter},
    rand_pcg::Pcg64,
    rand::{Rng, SeedableRng},
    rayon::prelude::*,
};


pub fn run_simulation(param: TrajectoryParams, json: Value, num_threads: Option<NonZeroUsize>){
    assert!(param.runs > 0, "runs must be at least 1");
    let graphs = load_coupled_graphs(
        &param.mpx_file,
        &param.contagion_layer,
        &param.awareness_layer
    );
    let opt = SirUaOptions::from_trajectory_param(&param);
    let model = CoupledModel::new(&graphs, opt.compartments(), param.sir_seed);

    let k = num_threads.unwrap_or_else(|| NonZeroUsize::new(1).unwrap());
    rayon::ThreadPoolBuilder::new().num_threads(k.get()).build_global().unwrap();

    // every run gets its own child stream of the master seed
    let mut rng = Pcg64::seed_from_u64(param.sir_seed);
    let seeds: Vec<u64> = (0..param.runs)
        .map(|_| rng.gen())
        .collect();

    let bar = crate::indication_bar(param.runs);
    let logs: Vec<SimulationLog> = seeds.par_iter()
        .progress_with(bar)
        .map(
            |&seed|
            {
                let mut model = model.clone();
                let mut run_rng = Pcg64::seed_from_u64(seed);
                model.reseed_sir_rng(&mut run_rng);
                model.propagate(param.epochs)
            }
        ).collect();

    if param.save_curves{
        let mut writer = UaCurveWriter::new(&param.base_name(num_threads));
        writer.write_header(&json);
        for (run, log) in logs.iter().enumerate()
        {
            writer.write_run(run as u64, log)
                .expect("unable to write curve file");
        }
    }

    let system_size_fraction = if param.fraction{
        Some(model.n() as f64)
    }else{
        None
    };

    let infected: Vec<Vec<u32>> = logs.iter()
        .map(|log| log.infected_curve())
        .collect();
    let aware: Vec<Vec<u32>> = logs.iter()
        .map(|log| log.aware_curve())
        .collect();

    let mean_i = mean_curve(&infected, system_size_fraction);
    let std_i = std_curve(&infected, &mean_i, system_size_fraction);
    let mean_a = mean_curve(&aware, system_size_fraction);
    let std_a = std_curve(&aware, &mean_a, system_size_fraction);
    let aggregated = AggregatedTrajectories{
        mean_i,
        std_i,
        mean_a,
        std_a
    };

    let name = param.name("dat", num_threads);
    println!("Creating: {}", &name);
    let file = File::create(&name)
        .expect("unable to create file");
    let mut buf = BufWriter::new(file);
    write_json(&mut buf, &json);
    aggregated.write(buf).unwrap();

    write_gnuplot_script(&param, num_threads, &name);
}

/// Loads the network, keeps the two layers of the experiment and renames
/// them after their role, the equivalent of popping the unused AUCS
/// layers before running
pub fn load_coupled_graphs(
    mpx_file: &str,
    contagion_layer: &str,
    awareness_layer: &str
) -> CoupledGraphs
{
    let mut net = MultiplexNetwork::from_mpx(mpx_file)
        .unwrap_or_else(|e| panic!("unable to load network {mpx_file}: {e}"));
    net.retain_layers(&[contagion_layer, awareness_layer]);
    net.rename_layer(contagion_layer, "contagion");
    net.rename_layer(awareness_layer, "awareness");
    let graphs = net.coupled_graphs("contagion", "awareness");
    println!(
        "loaded {}: {} actors, {} contagion edges, {} awareness edges",
        mpx_file,
        net.actor_count(),
        graphs.contagion.edge_count(),
        graphs.awareness.edge_count()
    );
    graphs
}

pub struct AggregatedTrajectories{
    pub mean_i: Vec<f64>,
    pub std_i: Vec<f64>,
    pub mean_a: Vec<f64>,
    pub std_a: Vec<f64>
}

impl AggregatedTrajectories{
    fn write<W>(&self, mut writer: W) -> std::io::Result<()>
    where W: Write
    {
        writeln!(writer, "#epoch meanI stdI meanA stdA")?;

        for (epoch, (((mean_i, std_i), mean_a), std_a)) in self.mean_i.iter()
            .zip(self.std_i.iter())
            .zip(self.mean_a.iter())
            .zip(self.std_a.iter())
            .enumerate()
        {
            writeln!(writer, "{} {:e} {:e} {:e} {:e}", epoch, mean_i, std_i, mean_a, std_a)?
        }
        Ok(())
    }
}

// mean curves with std bands, the gnuplot counterpart of the original
// matplotlib helper
fn write_gnuplot_script(
    param: &TrajectoryParams,
    num_threads: Option<NonZeroUsize>,
    dat_name: &str
){
    let name = param.name("gp", num_threads);
    println!("Creating: {}", &name);
    let file = File::create(name)
        .expect("unable to create file");
    let mut w = BufWriter::new(file);

    writeln!(w, "set terminal pdf").unwrap();
    writeln!(w, "set output '{}.pdf'", param.base_name(num_threads)).unwrap();
    writeln!(w, "set xlabel 'Epoch'").unwrap();
    if param.fraction{
        writeln!(w, "set ylabel 'fraction of Agents'").unwrap();
    } else {
        writeln!(w, "set ylabel 'nb of Agents'").unwrap();
    }
    writeln!(w, "set grid").unwrap();
    writeln!(w, "set style fill transparent solid 0.1 noborder").unwrap();
    writeln!(
        w,
        "plot '{dat}' u 1:($2-$3):($2+$3) w filledcurves lc 'red' notitle,\\"
        , dat = dat_name
    ).unwrap();
    writeln!(w, "    '' u 1:2 w l lc 'red' t 'Infected',\\").unwrap();
    writeln!(w, "    '' u 1:($4-$5):($4+$5) w filledcurves lc 'blue' notitle,\\").unwrap();
    writeln!(w, "    '' u 1:4 w l lc 'blue' t 'Aware'").unwrap();
}
