//! # pomis-plus
//!
//! POMIS+ discovery for multi-stage causal decision problems. Given a
//! causal diagram, its time-slice partition, one reward variable per step
//! and a horizon `T`, [`SequenceEnumerator`] finds every sequence of
//! per-step intervention sets worth considering; [`select_arms`] maps
//! those sequences onto an enumerated [`ActionTable`].
//!
//! ```no_run
//! use pomis_core::config::EnumerationConfig;
//! use pomis_graph::{CausalDiagram, MuctOracle};
//! use pomis_plus::{select_arms, ActionTable, SequenceEnumerator, TimePartition};
//!
//! # fn main() -> pomis_core::PomisResult<()> {
//! let diagram = CausalDiagram::new(
//!     &["X0", "Z0", "Y0", "X1", "Z1", "Y1"],
//!     &[("X0", "Z0"), ("Z0", "Y0"), ("X1", "Z1"), ("Z1", "Y1"), ("X0", "X1")],
//!     &[("X0", "Y0", "U0"), ("X1", "Y1", "U1")],
//! )?;
//! let partition = TimePartition::for_diagram(&diagram)?;
//! let rewards = ["Y0", "Y1"];
//! let enumerator = SequenceEnumerator::new(
//!     &diagram,
//!     &partition,
//!     &rewards,
//!     MuctOracle,
//!     &EnumerationConfig::default(),
//! )?;
//! let sequences = enumerator.enumerate(1)?;
//! let table = ActionTable::for_diagram(&diagram, &rewards, &Default::default())?;
//! let arms = select_arms(&table, &sequences);
//! # let _ = arms;
//! # Ok(())
//! # }
//! ```

pub mod arms;
pub mod enumerator;
pub mod partition;
mod product;

pub use arms::{select_arms, ActionTable, Arm, ArmStrategy};
pub use enumerator::{pomis_plus, SequenceEnumerator};
pub use partition::TimePartition;
