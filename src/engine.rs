//! Main implementation of the decision engine
//!
//! This module ties the tactical shortcuts, the heuristic evaluator and the
//! Monte Carlo playout loop together behind a single `choose_move` call.

use std::time::Instant;

use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::EngineConfig,
    game_state::GameState,
    heuristic::Evaluator,
    policy::{
        rollout::{RolloutPolicy, UniformRandomRollout},
        selection::{best_reply, most_wins},
    },
    shortcuts::{find_capturing_move, find_greedy_king_move, find_winning_move},
    stats::{Decision, SearchStatistics},
    tree::SearchNode,
    AgentError, Result,
};

/// The move selector
///
/// A fresh search tree is built for every call to [`DecisionEngine::choose_move`]
/// and dropped before it returns. Only the random number generator and the
/// statistics of the last call persist between calls.
pub struct DecisionEngine<R: Rng = StdRng, P = UniformRandomRollout> {
    /// Configuration for the search
    config: EngineConfig,

    /// Evaluator used to pick the reply each playout starts from
    evaluator: Evaluator,

    /// Policy used to play positions out
    rollout_policy: P,

    /// Random source for the rollout policy
    rng: R,

    /// Statistics gathered during the last decision
    statistics: SearchStatistics,
}

impl DecisionEngine<StdRng, UniformRandomRollout> {
    /// Creates an engine with the given configuration
    ///
    /// The playout generator is seeded from `config.seed` when present and
    /// from system entropy otherwise.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> DecisionEngine<R, UniformRandomRollout> {
    /// Creates an engine that draws playout randomness from `rng`
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        DecisionEngine {
            evaluator: Evaluator::new(config.weights),
            config,
            rollout_policy: UniformRandomRollout::new(),
            rng,
            statistics: SearchStatistics::new(),
        }
    }
}

impl<R: Rng, P> DecisionEngine<R, P> {
    /// Sets the rollout policy to use
    pub fn with_rollout_policy<Q>(self, policy: Q) -> DecisionEngine<R, Q> {
        DecisionEngine {
            config: self.config,
            evaluator: self.evaluator,
            rollout_policy: policy,
            rng: self.rng,
            statistics: self.statistics,
        }
    }

    /// Returns the configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the statistics of the last decision
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Chooses a move for `acting` in `state`
    ///
    /// # Errors
    ///
    /// * [`AgentError::InvalidConfiguration`] if the configuration is rejected
    /// * [`AgentError::NoLegalMoves`] if `state` has no legal moves
    /// * any error the rules engine raises while applying moves
    pub fn choose_move<S>(&mut self, state: &S, acting: &S::Side, opponent: &S::Side) -> Result<S::Move>
    where
        S: GameState,
        P: RolloutPolicy<S>,
    {
        self.config.validate()?;
        self.statistics = SearchStatistics::new();

        let start_time = Instant::now();
        let result = self.decide(state, acting, opponent);
        self.statistics.total_time = start_time.elapsed();

        if let Ok(ref mv) = result {
            debug!(
                "chose {:?} by {} after {} rollouts in {:?}",
                mv,
                self.statistics.decision.unwrap_or(Decision::Search),
                self.statistics.rollouts,
                self.statistics.total_time
            );
        }
        result
    }

    fn decide<S>(&mut self, state: &S, acting: &S::Side, opponent: &S::Side) -> Result<S::Move>
    where
        S: GameState,
        P: RolloutPolicy<S>,
    {
        let mut root = SearchNode::root(state.clone());
        root.expand()?;
        if root.children.is_empty() {
            return Err(AgentError::NoLegalMoves);
        }

        if let Some(mv) = find_winning_move(&root.children, acting) {
            return Ok(self.decided(Decision::Win, mv));
        }

        if self.config.greedy_king_shortcut {
            if let Some(mv) = find_greedy_king_move(state, acting)? {
                return Ok(self.decided(Decision::GreedyKing, mv));
            }
        }

        if self.config.capture_shortcut {
            if let Some(mv) = find_capturing_move(state, &root.children, opponent) {
                return Ok(self.decided(Decision::Capture, mv));
            }
        }

        self.search(&mut root.children, acting, opponent)?;

        self.statistics.win_counts = root.children.iter().map(|c| c.win_count).collect();
        for child in &root.children {
            trace!("{:?}: {} wins", child.mv, child.win_count);
        }

        let mv = most_wins(&root.children)?;
        Ok(self.decided(Decision::Search, mv))
    }

    fn decided<M>(&mut self, decision: Decision, mv: M) -> M {
        self.statistics.decision = Some(decision);
        mv
    }

    /// Runs playout passes over the root moves until the budget is spent
    ///
    /// Each pass extends every root move by its best reply, plays that reply
    /// out at random and credits the root move when `acting` wins. The time
    /// budget is only checked between passes.
    fn search<S>(
        &mut self,
        children: &mut [SearchNode<S>],
        acting: &S::Side,
        opponent: &S::Side,
    ) -> Result<()>
    where
        S: GameState,
        P: RolloutPolicy<S>,
    {
        let start_time = Instant::now();
        let budget = self.config.time_budget;

        loop {
            if start_time.elapsed() >= budget {
                self.statistics.stopped_early = true;
                break;
            }
            if let Some(max_iterations) = self.config.max_iterations {
                if self.statistics.iterations >= max_iterations {
                    break;
                }
            }

            for child in children.iter_mut() {
                child.expand()?;

                // A terminal root move has no replies and is its own playout.
                let start_state = match best_reply(&child.children, &self.evaluator, acting, opponent) {
                    Some(index) => &child.children[index].state,
                    None => &child.state,
                };

                let playout = self.rollout_policy.play_out(start_state, &mut self.rng)?;
                self.statistics.rollouts += 1;
                self.statistics.rollout_plies += playout.plies;

                if playout.final_state.winner().as_ref() == Some(acting) {
                    child.win_count += 1;
                }
            }

            self.statistics.iterations += 1;
        }

        Ok(())
    }
}
