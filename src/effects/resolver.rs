//! Card resolution.
//!
//! [`Game::play_card`] validates a play, takes the card out of the hand and
//! hands it to [`EffectResolver`], which picks a protocol by exhaustive match
//! on the card's effective kind. Protocols share two primitives:
//!
//! - [`Game::query_response`]: ask one actor for one card kind
//! - [`NegationChain`]: alternating Counter polls
//!
//! Everything runs synchronously and depth-first. A protocol checks
//! [`Game::is_over`] after anything that can kill, and stops as soon as the
//! game has a result.
//!
//! The played card stays in the context while it resolves and goes to the
//! discard pile once resolution finishes, unless it was equipped.

use log::{debug, warn};

use crate::cards::{CardId, CardKind};
use crate::core::{GameEvent, PlayerId};
use crate::error::{EngineError, Result};
use crate::game::Game;
use crate::oracle::{ResponseRequest, Situation};
use crate::stack::NegationChain;

use super::context::{Outcome, ResolutionContext, ResponseRecord};

/// Per-kind resolution protocols.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a card already removed from its player's hand.
    pub fn resolve(game: &mut Game, ctx: &mut ResolutionContext) -> Result<()> {
        match ctx.kind() {
            CardKind::Attack => Self::attack(game, ctx),
            CardKind::Heal => Self::heal(game, ctx),
            CardKind::Duel => Self::duel(game, ctx),
            CardKind::Onslaught | CardKind::Volley => Self::sweep(game, ctx),
            CardKind::Weapon(_) | CardKind::Armor(_) | CardKind::MountAttack | CardKind::MountDefense => {
                Self::equip(game, ctx)
            }
            CardKind::Dodge | CardKind::Counter => Err(EngineError::IllegalPlay {
                seat: ctx.source,
                reason: format!("{} is only played in response", ctx.kind()),
            }),
        }
    }

    fn single_target(ctx: &ResolutionContext) -> Result<PlayerId> {
        ctx.targets.first().copied().ok_or_else(|| EngineError::IllegalPlay {
            seat: ctx.source,
            reason: format!("{} needs a target", ctx.kind()),
        })
    }

    fn attack(game: &mut Game, ctx: &mut ResolutionContext) -> Result<()> {
        let source = ctx.source;
        let target = Self::single_target(ctx)?;

        let pierces = game
            .state()
            .actor(source)
            .equipment
            .weapon()
            .map_or(false, |w| w.pierces_armor());
        let blocked = game
            .state()
            .actor(target)
            .equipment
            .armor()
            .map_or(false, |armor| armor.blocks(ctx.card.color()));
        if blocked && !pierces {
            debug!("{} fizzles against {}'s armor", ctx.card, target);
            ctx.outcome = Outcome::Fizzled;
            return Ok(());
        }

        let record = game.query_response(target, CardKind::Dodge, Situation::Attacked { attacker: source })?;
        if ctx.record(record) {
            ctx.outcome = Outcome::Answered;
            return Ok(());
        }

        game.damage(target, 1, Some(source))?;
        ctx.outcome = Outcome::Applied;
        Ok(())
    }

    fn heal(game: &mut Game, ctx: &mut ResolutionContext) -> Result<()> {
        game.heal(ctx.source, 1);
        ctx.outcome = Outcome::Applied;
        Ok(())
    }

    fn equip(game: &mut Game, ctx: &mut ResolutionContext) -> Result<()> {
        let source = ctx.source;
        let card = ctx.card.clone();

        let replaced = match game.state_mut().actor_mut(source).equipment.equip(card.clone()) {
            Ok(replaced) => replaced,
            Err(card) => {
                return Err(EngineError::IllegalPlay {
                    seat: source,
                    reason: format!("{} is not equipment", card),
                })
            }
        };
        if let Some(old) = &replaced {
            game.state_mut().deck.discard(old.clone());
        }

        debug!("{} equips {}", source, card);
        game.emit(GameEvent::Equipped {
            seat: source,
            card,
            replaced,
        });
        ctx.outcome = Outcome::Equipped;
        Ok(())
    }

    fn duel(game: &mut Game, ctx: &mut ResolutionContext) -> Result<()> {
        let source = ctx.source;
        let target = Self::single_target(ctx)?;

        if !NegationChain::new(source, CardKind::Duel, target).run(game, ctx)? {
            ctx.negated.push(target);
            ctx.outcome = Outcome::Negated;
            return Ok(());
        }

        // The target defends first; every Attack played swaps the roles.
        let (mut defender, mut challenger) = (target, source);
        loop {
            if game.is_over() || !game.state().is_alive(defender) || !game.state().is_alive(challenger) {
                break;
            }
            let situation = Situation::DuelRound { opponent: challenger };
            let record = game.query_response(defender, CardKind::Attack, situation)?;
            if ctx.record(record) {
                std::mem::swap(&mut defender, &mut challenger);
                continue;
            }
            game.damage(defender, 1, Some(challenger))?;
            break;
        }

        ctx.outcome = Outcome::Applied;
        Ok(())
    }

    fn sweep(game: &mut Game, ctx: &mut ResolutionContext) -> Result<()> {
        let source = ctx.source;
        let kind = ctx.kind();
        let Some(answer) = kind.area_answer() else {
            return Err(EngineError::IllegalPlay {
                seat: source,
                reason: format!("{} is not an area card", kind),
            });
        };

        for target in ctx.targets.clone() {
            if game.is_over() {
                break;
            }
            if !game.state().is_alive(target) {
                continue;
            }
            if !NegationChain::new(source, kind, target).run(game, ctx)? {
                debug!("{} is spared from {}", target, kind);
                ctx.negated.push(target);
                continue;
            }

            let record = game.query_response(target, answer, Situation::AreaAssault { source, card: kind })?;
            if ctx.record(record) {
                continue;
            }
            game.damage(target, 1, Some(source))?;
        }

        ctx.outcome = Outcome::Applied;
        Ok(())
    }
}

impl Game {
    /// Validate and resolve one play from `seat`'s hand.
    ///
    /// All validation happens before anything moves; a rejected play leaves
    /// the state untouched and returns [`EngineError::IllegalPlay`].
    pub fn play_card(&mut self, seat: PlayerId, card_id: CardId, targets: &[PlayerId]) -> Result<ResolutionContext> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        let illegal = |reason: String| EngineError::IllegalPlay { seat, reason };

        if !self.state().has_seat(seat) {
            return Err(illegal(format!("{} is not at this table", seat)));
        }
        if !self.state().is_alive(seat) {
            return Err(illegal("dead actors cannot play".into()));
        }
        let card = self
            .state()
            .actor(seat)
            .hand_card(card_id)
            .cloned()
            .ok_or_else(|| illegal(format!("{} is not in hand", card_id)))?;

        let sets = self.state().target_sets(seat);
        if !self.state().is_playable(seat, &card, &sets) {
            return Err(illegal(format!("{} is not playable now", card)));
        }
        let kind = card.effective_kind();
        let resolved = self
            .state()
            .resolve_targets(seat, kind, targets, &sets)
            .ok_or_else(|| illegal(format!("illegal targets {:?} for {}", targets, card)))?;

        let actor = self.state_mut().actor_mut(seat);
        let card = actor
            .take_card(card_id)
            .ok_or_else(|| illegal(format!("{} vanished from hand", card_id)))?;
        if kind == CardKind::Attack {
            actor.turn.attacks_used += 1;
        }

        debug!("{} plays {} at {:?}", seat, card, resolved.as_slice());
        self.emit(GameEvent::CardPlayed {
            seat,
            card: card.clone(),
            targets: resolved.to_vec(),
        });

        let mut ctx = ResolutionContext::new(seat, card, resolved);
        EffectResolver::resolve(self, &mut ctx)?;

        if ctx.outcome != Outcome::Equipped {
            self.state_mut().deck.discard(ctx.card.clone());
        }
        self.sync_all();
        Ok(ctx)
    }

    /// Ask `responder` for a `requested` card.
    ///
    /// The oracle is only consulted when the responder actually holds a
    /// candidate. An answer outside the candidates counts as a decline. An
    /// accepted card is discarded immediately.
    pub fn query_response(
        &mut self,
        responder: PlayerId,
        requested: CardKind,
        situation: Situation,
    ) -> Result<ResponseRecord> {
        let candidates = self.state().actor(responder).cards_of(requested);
        let mut record = ResponseRecord {
            responder,
            requested,
            answered: None,
            situation,
        };
        if candidates.is_empty() {
            return Ok(record);
        }

        let request = ResponseRequest {
            responder,
            requested,
            candidates,
            situation,
        };
        let answer = self.oracles[responder]
            .ask_response(&request)
            .map_err(|e| EngineError::oracle(responder, e))?;

        let Some(id) = answer else {
            return Ok(record);
        };
        if !request.candidates.iter().any(|c| c.id == id) {
            warn!("{} answered {} with {}, not a candidate; declining", responder, requested, id);
            return Ok(record);
        }
        let Some(card) = self.state_mut().actor_mut(responder).take_card(id) else {
            return Ok(record);
        };

        debug!("{} responds with {} ({})", responder, card, situation.tag());
        self.emit(GameEvent::CardResponded {
            seat: responder,
            card: card.clone(),
            requested,
        });
        self.state_mut().deck.discard(card.clone());
        record.answered = Some(card);
        Ok(record)
    }
}
