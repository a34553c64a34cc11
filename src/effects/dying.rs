//! Dying and death.
//!
//! Each zero-crossing of hp opens exactly one dying resolution, before any
//! further card resolution. Only the dying actor may save itself, with a
//! Heal card that brings it back to 1 hp. Otherwise it dies:
//!
//! 1. status becomes dead, hand and equipment go to the discard pile
//! 2. the win evaluator runs; a result ends everything here
//! 3. otherwise kill consequences apply to the killer

use log::info;

use crate::actors::Identity;
use crate::cards::CardKind;
use crate::core::{GameEvent, PlayerId};
use crate::error::Result;
use crate::game::Game;
use crate::oracle::Situation;
use crate::rules::WinEvaluator;

impl Game {
    /// Resolve `victim`'s dying state. The killer, if any, is whoever dealt
    /// the damage that took the victim to zero.
    pub fn resolve_dying(&mut self, victim: PlayerId) -> Result<()> {
        let actor = self.state().actor(victim);
        if !actor.is_dying() {
            return Ok(());
        }
        let source = actor.last_damage_source();

        let record = self.query_response(victim, CardKind::Heal, Situation::Dying { source })?;
        if record.is_answered() {
            self.heal(victim, 1);
            info!("{} is saved from dying", victim);
            return Ok(());
        }

        self.kill(victim, source)
    }

    fn kill(&mut self, victim: PlayerId, killer: Option<PlayerId>) -> Result<()> {
        let actor = self.state_mut().actor_mut(victim);
        actor.mark_dead();
        let identity = actor.identity;
        let cards = actor.strip();

        info!("{} ({:?}) dies, killed by {:?}", victim, identity, killer);
        if !cards.is_empty() {
            self.emit(GameEvent::CardsDiscarded {
                seat: victim,
                cards: cards.clone(),
            });
            self.state_mut().deck.discard_all(cards);
        }
        self.emit(GameEvent::Died {
            seat: victim,
            identity,
            killer,
        });

        if let Some(result) = WinEvaluator::evaluate(&self.state().actors) {
            self.finish(result);
            return Ok(());
        }

        if let Some(killer) = killer {
            self.reward_kill(killer, victim, identity);
        }
        self.sync_all();
        Ok(())
    }

    fn reward_kill(&mut self, killer: PlayerId, victim: PlayerId, identity: Identity) {
        if killer == victim || !self.state().is_alive(killer) {
            return;
        }

        match identity {
            Identity::Rebel => {
                let reward = self.state().rules.rebel_kill_reward;
                let drawn = self.draw(killer, reward);
                info!("{} draws {} for killing a Rebel", killer, drawn);
            }
            Identity::Loyalist if self.state().actor(killer).identity == Identity::Lord => {
                let cards = self.state_mut().actor_mut(killer).strip();
                info!("{} killed a Loyalist and discards {} cards", killer, cards.len());
                if !cards.is_empty() {
                    self.emit(GameEvent::CardsDiscarded {
                        seat: killer,
                        cards: cards.clone(),
                    });
                    self.state_mut().deck.discard_all(cards);
                }
            }
            _ => {}
        }
    }
}
