//! POMIS+ sequence enumeration: backtracking over time-indexed stages,
//! composing per-stage candidate sets into multi-stage sequences.

mod cache;
mod state;

use std::collections::BTreeSet;
use std::rc::Rc;

use tracing::{debug, info, instrument, trace};

use pomis_core::config::EnumerationConfig;
use pomis_core::errors::{EnumerationError, GraphError};
use pomis_core::{CandidatePair, PomisError, PomisResult, Sequence, SequenceSet, VarSet};
use pomis_graph::{CausalDiagram, MuctOracle, SingleSliceOracle};

use self::cache::StageCache;
use self::state::{BranchState, Frame};
use crate::partition::TimePartition;
use crate::product::for_each_combination;

/// Enumerates POMIS+ sequences for one diagram, partition, and reward list.
///
/// Construction validates the inputs once; each call to [`enumerate`] or
/// [`enumerate_into`] then runs an independent depth-first search with its
/// own oracle cache.
///
/// [`enumerate`]: SequenceEnumerator::enumerate
/// [`enumerate_into`]: SequenceEnumerator::enumerate_into
#[derive(Debug)]
pub struct SequenceEnumerator<'a, O = MuctOracle> {
    diagram: &'a CausalDiagram,
    partition: &'a TimePartition,
    rewards: Vec<String>,
    /// `G[Vs[t]]`, one per partition slice.
    slice_diagrams: Vec<CausalDiagram>,
    oracle: O,
    sort_candidates: bool,
    max_sequences: Option<usize>,
}

impl<'a, O: SingleSliceOracle> SequenceEnumerator<'a, O> {
    pub fn new<S: AsRef<str>>(
        diagram: &'a CausalDiagram,
        partition: &'a TimePartition,
        rewards: &[S],
        oracle: O,
        config: &EnumerationConfig,
    ) -> PomisResult<Self> {
        partition.validate_diagram(diagram)?;
        for reward in rewards {
            if !diagram.contains(reward.as_ref()) {
                return Err(GraphError::UnknownVariable {
                    name: reward.as_ref().to_string(),
                    context: "reward list".to_string(),
                }
                .into());
            }
        }
        partition.validate_rewards(rewards)?;

        let slice_diagrams = partition
            .slices()
            .iter()
            .map(|slice| diagram.induced(slice))
            .collect();

        Ok(Self {
            diagram,
            partition,
            rewards: rewards.iter().map(|r| r.as_ref().to_string()).collect(),
            slice_diagrams,
            oracle,
            sort_candidates: config.effective_sort_candidates(),
            max_sequences: config.max_sequences,
        })
    }

    pub fn rewards(&self) -> &[String] {
        &self.rewards
    }

    pub fn partition(&self) -> &TimePartition {
        self.partition
    }

    /// Largest horizon this enumerator accepts.
    pub fn max_horizon(&self) -> Option<usize> {
        self.partition.len().min(self.rewards.len()).checked_sub(1)
    }

    /// All sequences up to `horizon`, in a fresh collection.
    pub fn enumerate(&self, horizon: usize) -> PomisResult<SequenceSet> {
        let mut sequences = SequenceSet::new();
        self.enumerate_into(horizon, &mut sequences)?;
        Ok(sequences)
    }

    /// Add all sequences up to `horizon` to `sequences`, returning how many
    /// were new. Reusing one accumulator across calls yields the union.
    /// On error `sequences` is left untouched.
    #[instrument(level = "debug", skip(self, sequences))]
    pub fn enumerate_into(&self, horizon: usize, sequences: &mut SequenceSet) -> PomisResult<usize> {
        self.check_horizon(horizon)?;

        let mut cache = StageCache::default();
        let mut found = SequenceSet::new();
        let mut stack = vec![Frame::root(horizon)];
        let mut added = 0usize;
        let mut branches = 0usize;

        while let Some(Frame { stage, state }) = stack.pop() {
            let pairs = cache.pairs(stage, || self.stage_pairs(stage))?;
            trace!(stage, pairs = pairs.len(), "expanding stage");

            for pair in pairs.iter() {
                branches += 1;
                let mut branch = state.clone();
                self.commit_pair(&mut branch, pair, horizon)?;
                self.refine_unrefined(&mut branch, pair, &mut cache);

                let earliest = branch.earliest_resolved().unwrap_or(0);
                if earliest > stage {
                    return Err(EnumerationError::StalledStage { stage, earliest }.into());
                }
                if earliest > 0 {
                    debug!(stage, pair = %pair, next = earliest - 1, "descending");
                    stack.push(Frame {
                        stage: earliest - 1,
                        state: branch,
                    });
                    continue;
                }

                let before = added;
                for_each_combination(&branch.choices(horizon), |steps| {
                    let sequence = Sequence::new(steps);
                    if !sequences.contains(&sequence) && found.insert(sequence) {
                        added += 1;
                        if let Some(limit) = self.max_sequences {
                            if added > limit {
                                return Err(EnumerationError::SequenceLimitExceeded { limit });
                            }
                        }
                    }
                    Ok(())
                })?;
                debug!(stage, pair = %pair, new = added - before, "branch complete");
            }
        }

        sequences.extend(found);
        let (cached_stages, cached_slices) = cache.stats();
        info!(
            horizon,
            branches,
            added,
            total = sequences.len(),
            cached_stages,
            cached_slices,
            "POMIS+ enumeration complete"
        );
        Ok(added)
    }

    /// Myopic baseline: per-slice POMIS sets combined across `0..=horizon`,
    /// each combination flattened into one support set.
    pub fn myopic_supports(&self, horizon: usize) -> PomisResult<BTreeSet<VarSet>> {
        self.check_horizon(horizon)?;
        let choices: Vec<Vec<VarSet>> = (0..=horizon)
            .map(|t| {
                self.oracle
                    .slice_pomis(&self.slice_diagrams[t], &self.rewards[t])
                    .into_iter()
                    .collect()
            })
            .collect();

        let mut supports = BTreeSet::new();
        for_each_combination::<_, PomisError>(&choices, |combo| {
            supports.insert(combo.into_iter().flatten().collect());
            Ok(())
        })?;
        Ok(supports)
    }

    fn check_horizon(&self, horizon: usize) -> Result<(), EnumerationError> {
        if horizon >= self.partition.len() || horizon >= self.rewards.len() {
            return Err(EnumerationError::HorizonOutOfRange {
                horizon,
                slices: self.partition.len(),
                rewards: self.rewards.len(),
            });
        }
        Ok(())
    }

    /// Oracle pairs for `G[An(Y_stage)]`, ordered by earliest time touched.
    fn stage_pairs(&self, stage: usize) -> PomisResult<Vec<CandidatePair>> {
        let reward = &self.rewards[stage];
        let restricted = self.diagram.ancestral(reward);
        let pairs = self.oracle.candidate_pairs(&restricted, reward);
        if !self.sort_candidates {
            return Ok(pairs);
        }

        let mut keyed = pairs
            .into_iter()
            .map(|pair| -> PomisResult<(usize, CandidatePair)> {
                let earliest = pair
                    .interventions
                    .iter()
                    .map(|x| self.partition.time_index(x))
                    .collect::<Result<Vec<_>, _>>()?
                    .into_iter()
                    .min()
                    .unwrap_or(0);
                Ok((earliest, pair))
            })
            .collect::<PomisResult<Vec<_>>>()?;
        keyed.sort_by_key(|(earliest, _)| *earliest);
        Ok(keyed.into_iter().map(|(_, pair)| pair).collect())
    }

    /// Append `Xs` to `IBplus`; an empty `Xs` still resolves index 0.
    fn commit_pair(
        &self,
        branch: &mut BranchState,
        pair: &CandidatePair,
        horizon: usize,
    ) -> PomisResult<()> {
        for name in &pair.interventions {
            let t = self.partition.time_index(name)?;
            if t > horizon {
                return Err(EnumerationError::IndexOutOfHorizon {
                    name: name.clone(),
                    index: t,
                    horizon,
                }
                .into());
            }
            branch.commit(t, name.clone());
        }
        if pair.interventions.is_empty() {
            branch.resolve(0);
        }
        Ok(())
    }

    /// Fill `QIB` for every resolved index that lacks it, keeping only
    /// options disjoint from the pair's boundary set.
    fn refine_unrefined(&self, branch: &mut BranchState, pair: &CandidatePair, cache: &mut StageCache) {
        for t in branch.unrefined() {
            let committed = branch.committed(t);
            let options = cache.refinements(t, &committed, || {
                let cut = self.slice_diagrams[t].do_intervention(&committed);
                self.oracle
                    .slice_pomis(&cut, &self.rewards[t])
                    .into_iter()
                    .collect()
            });
            let kept: Rc<[VarSet]> = options.iter().filter(|q| pair.admits(q)).cloned().collect();
            branch.refine(t, kept);
        }
    }
}

/// POMIS+ sequences for `diagram` with the MUCT oracle and default settings.
pub fn pomis_plus<S: AsRef<str>>(
    diagram: &CausalDiagram,
    partition: &TimePartition,
    rewards: &[S],
    horizon: usize,
) -> PomisResult<SequenceSet> {
    SequenceEnumerator::new(
        diagram,
        partition,
        rewards,
        MuctOracle,
        &EnumerationConfig::default(),
    )?
    .enumerate(horizon)
}
