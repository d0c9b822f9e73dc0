//! 流量需求

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidDemandError {
    #[error("demand {from}->{to}: volume must be a positive number, got {volume}")]
    NonPositiveVolume { from: String, to: String, volume: f64 },
    #[error("demand has an empty node id")]
    EmptyNode,
}

/// 不可变的点到点流量需求
#[derive(Debug, Clone, PartialEq)]
pub struct Demand {
    source: String,
    destination: String,
    volume: f64,
}

impl Demand {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        volume: f64,
    ) -> Result<Self, InvalidDemandError> {
        let source = source.into();
        let destination = destination.into();
        if source.is_empty() || destination.is_empty() {
            return Err(InvalidDemandError::EmptyNode);
        }
        if !(volume.is_finite() && volume > 0.0) {
            return Err(InvalidDemandError::NonPositiveVolume {
                from: source,
                to: destination,
                volume,
            });
        }
        Ok(Self {
            source,
            destination,
            volume,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }
}
