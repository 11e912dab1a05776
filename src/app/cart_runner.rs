use crate::app::receipt;
use crate::config::CartConfig;
use crate::core::accumulator::FluentAccumulator;
use crate::domain::model::Entry;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartReport {
    pub name: String,
    pub entries: Vec<Entry>,
    pub total: f64,
    pub removed: Vec<String>,
}

impl CartReport {
    pub fn receipt(&self) -> String {
        receipt::render(&self.name, &self.entries, self.total)
    }
}

pub fn run(config: &CartConfig, removals: &[String]) -> CartReport {
    let mut cart = FluentAccumulator::new();
    for entry in &config.entries {
        cart.with_entry(entry.label.clone(), entry.amount);
    }
    tracing::info!("🛒 {} holds {} entries, total {:.2}", config.name, cart.len(), cart.total());

    let mut removed = Vec::new();
    for label in removals {
        if cart.contains(label) {
            removed.push(label.clone());
        }
        cart.without_entry(label);
    }
    if !removed.is_empty() {
        tracing::info!("Removed {:?}, total now {:.2}", removed, cart.total());
    }

    CartReport {
        name: config.name.clone(),
        entries: cart.snapshot_entries(),
        total: cart.total(),
        removed,
    }
}
