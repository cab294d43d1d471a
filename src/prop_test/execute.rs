use{
    super::*,
    crate::{ua_model::*, trajectory::load_coupled_graphs},
    serde_json::Value,
    std::num::*,
};


pub fn run_simulation(param: PropTestParams, _json: Value, _num_threads: Option<NonZeroUsize>){
    let graphs = load_coupled_graphs(
        &param.mpx_file,
        &param.contagion_layer,
        &param.awareness_layer
    );
    let opt = SirUaOptions::from_prop_test_param(&param);
    let mut model = CoupledModel::new(&graphs, opt.compartments(), param.sir_seed);

    let log = model.propagate(param.epochs);

    println!("epoch S I R U A");
    for (epoch, counts) in log.counts.iter().enumerate()
    {
        println!(
            "{} {} {} {} {} {}",
            epoch,
            counts.s,
            counts.i,
            counts.r,
            counts.u,
            counts.a
        );
    }
    println!("ever infected: {}", model.calculate_ever_infected());
    println!("max infected: {}", log.max_infected());
}
