use net_ensembles::*;

use{
    std::{
        collections::HashMap,
        io::BufRead,
        path::Path
    },
    super::*,
    crate::ua_model::*
};

/// A multilayer network with the actor names relabelled to contiguous
/// indices (first-seen order). Every layer spans the full actor set,
/// an actor without edges in a layer is simply isolated there. This is
/// what makes the network multiplex.
#[derive(Debug, Clone)]
pub struct MultiplexNetwork{
    actors: Vec<String>,
    actor_index: HashMap<String, usize>,
    layers: Vec<MultiplexLayer>
}

#[derive(Debug, Clone)]
pub struct MultiplexLayer{
    pub name: String,
    pub edges: Vec<[usize; 2]>
}

/// The two state carrying layer graphs the model runs on
#[derive(Clone)]
pub struct CoupledGraphs{
    pub contagion: ContagionGraph,
    pub awareness: AwarenessGraph
}

impl MultiplexNetwork{
    pub fn from_mpx<P: AsRef<Path>>(path: P) -> Result<Self, MpxError>
    {
        let data = parse_mpx_file(path)?;
        Ok(Self::from_mpx_data(data))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MpxError>
    {
        let data = parse_mpx(reader)?;
        Ok(Self::from_mpx_data(data))
    }

    pub fn from_mpx_data(data: MpxData) -> Self
    {
        let mut net = Self{
            actors: Vec::new(),
            actor_index: HashMap::new(),
            layers: data.layers
                .iter()
                .map(
                    |layer| MultiplexLayer{
                        name: layer.name.clone(),
                        edges: Vec::new()
                    }
                ).collect()
        };

        for actor in &data.actors{
            net.actor_id(actor);
        }
        for (actor, _layer) in &data.vertices{
            net.actor_id(actor);
        }
        for (a, b, layer) in &data.edges{
            let ia = net.actor_id(a);
            let ib = net.actor_id(b);
            let layer = net.layers
                .iter_mut()
                .find(|l| &l.name == layer)
                .expect("edge references unknown layer");
            layer.edges.push([ia, ib]);
        }
        net
    }

    // index of the actor, registering it on first sight
    fn actor_id(&mut self, name: &str) -> usize
    {
        if let Some(&id) = self.actor_index.get(name){
            return id;
        }
        let id = self.actors.len();
        self.actors.push(name.to_owned());
        self.actor_index.insert(name.to_owned(), id);
        id
    }

    pub fn actor_count(&self) -> usize
    {
        self.actors.len()
    }

    pub fn actor_name(&self, index: usize) -> &str
    {
        &self.actors[index]
    }

    pub fn layer_names(&self) -> Vec<&str>
    {
        self.layers
            .iter()
            .map(|l| l.name.as_str())
            .collect()
    }

    pub fn layer(&self, name: &str) -> Option<&MultiplexLayer>
    {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Drops every layer that is not listed, like popping the unused
    /// layers of the AUCS network before the experiment
    pub fn retain_layers(&mut self, keep: &[&str])
    {
        self.layers.retain(|l| keep.contains(&l.name.as_str()));
    }

    /// Renames a layer after its role, e.g. lunch -> contagion.
    /// Returns false if no layer of that name exists.
    pub fn rename_layer(&mut self, old: &str, new: &str) -> bool
    {
        match self.layers.iter_mut().find(|l| l.name == old){
            Some(layer) => {
                layer.name = new.to_owned();
                true
            },
            None => false
        }
    }

    /// Builds the two layer graphs over the full actor set.
    /// Self loops and duplicate edges of the file are dropped.
    pub fn coupled_graphs(
        &self,
        contagion_layer: &str,
        awareness_layer: &str
    ) -> CoupledGraphs
    {
        let n = self.actor_count();
        let contagion_edges = self.layer(contagion_layer)
            .unwrap_or_else(
                || panic!(
                    "contagion layer '{}' not in network, available: {:?}",
                    contagion_layer,
                    self.layer_names()
                )
            );
        let awareness_edges = self.layer(awareness_layer)
            .unwrap_or_else(
                || panic!(
                    "awareness layer '{}' not in network, available: {:?}",
                    awareness_layer,
                    self.layer_names()
                )
            );

        let mut contagion = ContagionGraph::new(n);
        for &[a, b] in contagion_edges.edges.iter().filter(|&&[a, b]| a != b){
            // duplicate edges error, the first one counts
            let _ = contagion.add_edge(a, b);
        }
        let mut awareness = AwarenessGraph::new(n);
        for &[a, b] in awareness_edges.edges.iter().filter(|&&[a, b]| a != b){
            let _ = awareness.add_edge(a, b);
        }
        CoupledGraphs{
            contagion,
            awareness
        }
    }
}


#[cfg(test)]
mod tests{
    use super::*;

    const NET: &str = "\
#TYPE multiplex
#LAYERS
lunch,UNDIRECTED
facebook,UNDIRECTED
work,UNDIRECTED
#ACTORS
U1
U2
U3
U4
#EDGES
U1,U2,lunch
U2,U3,lunch
U2,U3,lunch
U3,U3,lunch
U1,U3,facebook
U1,U4,work
";

    fn net() -> MultiplexNetwork
    {
        MultiplexNetwork::from_reader(NET.as_bytes()).unwrap()
    }

    #[test]
    fn relabelling_follows_first_seen_order()
    {
        let net = net();
        assert_eq!(net.actor_count(), 4);
        assert_eq!(net.actor_name(0), "U1");
        assert_eq!(net.actor_name(3), "U4");
        assert_eq!(net.layer("lunch").unwrap().edges[0], [0, 1]);
    }

    #[test]
    fn retain_and_rename()
    {
        let mut net = net();
        net.retain_layers(&["lunch", "facebook"]);
        assert_eq!(net.layer_names(), vec!["lunch", "facebook"]);
        assert!(net.rename_layer("lunch", "contagion"));
        assert!(net.rename_layer("facebook", "awareness"));
        assert!(!net.rename_layer("work", "whatever"));
        assert!(net.layer("contagion").is_some());
    }

    #[test]
    fn coupled_graphs_span_all_actors()
    {
        let net = net();
        let graphs = net.coupled_graphs("lunch", "facebook");
        assert_eq!(graphs.contagion.vertex_count(), 4);
        assert_eq!(graphs.awareness.vertex_count(), 4);
        // duplicate U2-U3 and the self loop are dropped
        assert_eq!(graphs.contagion.edge_count(), 2);
        assert_eq!(graphs.awareness.edge_count(), 1);
    }

    #[test]
    #[should_panic]
    fn missing_layer_panics()
    {
        let net = net();
        net.coupled_graphs("lunch", "twitter");
    }
}
