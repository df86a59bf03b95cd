//! Diagram Configuration and Builder
//!
//! This module provides configuration types for deterministic diagram generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, Result};

/// Upper bound on Lloyd iterations accepted by the builder
const MAX_LLOYD_ITERATIONS: usize = 50;

/// How Voronoi cells pick the generators they are clipped against
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStrategy {
    /// Scan x-sorted generators with a shrinking pruning radius
    BruteForce,
    /// Clip only against Delaunay neighbors
    #[default]
    Connectivity,
}

impl CellStrategy {
    /// Get a human-readable name for this strategy
    pub fn name(self) -> &'static str {
        match self {
            CellStrategy::BruteForce => "BruteForce",
            CellStrategy::Connectivity => "Connectivity",
        }
    }
}

/// Configuration for deterministic diagram generation
///
/// The same configuration and input points always produce the identical
/// diagram.
///
/// # Example
///
/// ```rust
/// use planar_voronoi::*;
///
/// let config = DiagramConfigBuilder::new()
///     .seed(42)
///     .strategy(CellStrategy::BruteForce)
///     .build()
///     .unwrap();
///
/// // Config is serializable (with "serde" feature)
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: DiagramConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config.seed, restored.seed);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramConfig {
    /// Seed for the jitter random source
    pub seed: u64,

    /// Maximum per-coordinate jitter applied before triangulating
    ///
    /// Must exceed the floating-point epsilon of the coordinates yet stay
    /// small against nearest-neighbor spacing. Grids and other structured
    /// input need a nonzero value. 0.0 disables jitter.
    pub jitter: f64,

    /// Add convex hull edges to the connectivity
    pub include_hull_edges: bool,

    /// Neighbor selection for Voronoi cells
    pub strategy: CellStrategy,

    /// Number of Lloyd's Relaxation iterations applied to the generators
    ///
    /// - 0: Use the generators as given (default)
    /// - 3-5: Good uniformity
    pub lloyd_iterations: usize,

    /// Convergence threshold for Lloyd's relaxation (fraction of outline diagonal)
    ///
    /// - 0.0: Disable early termination (run all iterations)
    /// - 0.001: Default
    pub lloyd_convergence: f64,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            jitter: 1e-9,
            include_hull_edges: true,
            strategy: CellStrategy::default(),
            lloyd_iterations: 0,
            lloyd_convergence: 0.001,
        }
    }
}

/// Builder for creating DiagramConfig with validation
///
/// # Example
///
/// ```rust
/// use planar_voronoi::*;
///
/// let config = DiagramConfigBuilder::new()
///     .seed(12345)
///     .jitter(1e-6)
///     .unwrap()
///     .lloyd_iterations(3)
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(config.lloyd_iterations, 3);
/// ```
#[derive(Debug, Clone)]
pub struct DiagramConfigBuilder {
    seed: Option<u64>,
    jitter: f64,
    include_hull_edges: bool,
    strategy: CellStrategy,
    lloyd_iterations: usize,
    lloyd_convergence: f64,
}

impl DiagramConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - jitter: 1e-9
    /// - include_hull_edges: true
    /// - strategy: Connectivity
    /// - lloyd_iterations: 0
    /// - lloyd_convergence: 0.001
    pub fn new() -> Self {
        let defaults = DiagramConfig::default();
        Self {
            seed: None,
            jitter: defaults.jitter,
            include_hull_edges: defaults.include_hull_edges,
            strategy: defaults.strategy,
            lloyd_iterations: defaults.lloyd_iterations,
            lloyd_convergence: defaults.lloyd_convergence,
        }
    }

    /// Set the random seed used for jitter
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the jitter magnitude
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the amount is negative or not finite
    pub fn jitter(mut self, amount: f64) -> Result<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DiagramError::InvalidConfig(format!(
                "jitter must be finite and >= 0 (got {})",
                amount
            )));
        }
        self.jitter = amount;
        Ok(self)
    }

    /// Include convex hull edges in the connectivity
    pub fn include_hull_edges(mut self, include: bool) -> Self {
        self.include_hull_edges = include;
        self
    }

    /// Set the cell construction strategy
    pub fn strategy(mut self, strategy: CellStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the number of Lloyd's Relaxation iterations
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if iterations > 50
    pub fn lloyd_iterations(mut self, iterations: usize) -> Result<Self> {
        if iterations > MAX_LLOYD_ITERATIONS {
            return Err(DiagramError::InvalidConfig(format!(
                "Lloyd iterations must be <= {} (got {})",
                MAX_LLOYD_ITERATIONS, iterations
            )));
        }
        self.lloyd_iterations = iterations;
        Ok(self)
    }

    /// Set the convergence threshold for Lloyd's relaxation
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if threshold is negative or not finite
    pub fn lloyd_convergence(mut self, threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(DiagramError::InvalidConfig(format!(
                "Lloyd convergence threshold must be >= 0 (got {})",
                threshold
            )));
        }
        self.lloyd_convergence = threshold;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    pub fn build(self) -> Result<DiagramConfig> {
        let seed = self.seed.unwrap_or_else(rand::random);

        Ok(DiagramConfig {
            seed,
            jitter: self.jitter,
            include_hull_edges: self.include_hull_edges,
            strategy: self.strategy,
            lloyd_iterations: self.lloyd_iterations,
            lloyd_convergence: self.lloyd_convergence,
        })
    }
}

impl Default for DiagramConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
