//! The demo's radio world: reference models wired behind the collaborator
//! traits the sampler consumes.

use nt_core::{FlowId, NodeId, SimTime, Vec3};
use nt_radio::{
    CbrFlowModel, FlowCounters, FlowProbe, KinematicModel, LogDistancePathLoss, MobilityModel,
    SignalSource,
};

/// Kinematic mobility + one CBR downlink flow + log-distance path loss.
pub struct OfficeWorld {
    pub kinematics:   KinematicModel,
    pub flow:         CbrFlowModel,
    pub path_loss:    LogDistancePathLoss,
    pub tx_power_dbm: f64,
}

impl FlowProbe for OfficeWorld {
    fn flow_counters(&mut self, now: SimTime) -> Vec<(FlowId, FlowCounters)> {
        vec![(self.flow.flow, self.flow.counters(now))]
    }
}

impl MobilityModel for OfficeWorld {
    fn position(&self, node: NodeId, now: SimTime) -> Vec3 {
        self.kinematics.position(node, now)
    }

    fn place(&mut self, node: NodeId, position: Vec3, now: SimTime) {
        self.kinematics.place(node, position, now);
    }

    fn set_velocity(&mut self, node: NodeId, now: SimTime, velocity: Vec3) {
        self.kinematics.set_velocity(node, now, velocity);
    }
}

impl SignalSource for OfficeWorld {
    fn rx_power_dbm(&self, terminal: NodeId, station: NodeId, now: SimTime) -> f64 {
        let distance = self
            .kinematics
            .position(terminal, now)
            .distance(self.kinematics.position(station, now));
        self.path_loss.rx_power_dbm(self.tx_power_dbm, distance)
    }
}
