use {
    serde::{Serialize, Deserialize},
    net_ensembles::Node
};

/// Compartments of the contagion process, spreading on the contagion layer
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
#[derive(Serialize, Deserialize)]
pub enum ContagionState{
    Susceptible,
    Infected,
    Removed,
}

impl ContagionState{
    pub fn sus_check(&self) -> bool{
        matches!(self, ContagionState::Susceptible)
    }
    pub fn inf_check(&self) -> bool{
        matches!(self, ContagionState::Infected)
    }
    pub fn rem_check(&self) -> bool{
        matches!(self, ContagionState::Removed)
    }

    pub fn is_or_was_infected(&self) -> bool
    {
        matches!(self, Self::Infected | Self::Removed)
    }
}

impl Default for ContagionState{
    fn default() -> Self{
        ContagionState::Susceptible
    }
}

impl Node for ContagionState{
    fn new_from_index(_index: usize) -> Self{
        ContagionState::Susceptible
    }
}

/// Compartments of the awareness process, spreading on the awareness layer
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
#[derive(Serialize, Deserialize)]
pub enum AwarenessState{
    Unaware,
    Aware,
}

impl AwarenessState{
    pub fn unaware_check(&self) -> bool{
        matches!(self, AwarenessState::Unaware)
    }
    pub fn aware_check(&self) -> bool{
        matches!(self, AwarenessState::Aware)
    }
}

impl Default for AwarenessState{
    fn default() -> Self{
        AwarenessState::Unaware
    }
}

impl Node for AwarenessState{
    fn new_from_index(_index: usize) -> Self{
        AwarenessState::Unaware
    }
}

pub type ContagionGraph = net_ensembles::GenericGraph<ContagionState, net_ensembles::graph::NodeContainer<ContagionState>>;
pub type AwarenessGraph = net_ensembles::GenericGraph<AwarenessState, net_ensembles::graph::NodeContainer<AwarenessState>>;
