use super::{LampCommand, LampError, LampId, LampInfo, LampSink, TransitionTime};
use std::collections::{HashMap, VecDeque};

/// Commands kept by [`MemoryLamps::applied`]. Older ones are dropped.
pub const APPLIED_HISTORY: usize = 256;

/// Last known properties of an in-memory lamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LampState {
    pub on: bool,
    pub brightness: u8,
    pub hue: u16,
    pub saturation: u8,
    pub transition: Option<TransitionTime>,
}

/// Lamps that only exist in memory. Remembers the most recent commands it
/// received, up to [`APPLIED_HISTORY`].
#[derive(Debug, Default)]
pub struct MemoryLamps {
    lamps: Vec<LampInfo>,
    states: HashMap<LampId, LampState>,
    applied: VecDeque<LampCommand>,
}

impl MemoryLamps {
    pub fn new(lamps: Vec<LampInfo>) -> Self {
        let states = lamps
            .iter()
            .map(|l| (l.id.clone(), LampState::default()))
            .collect();
        Self {
            lamps,
            states,
            applied: VecDeque::with_capacity(APPLIED_HISTORY),
        }
    }

    /// One lamp per name, numbered from 1 the way a bridge numbers them.
    pub fn with_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self::new(
            names
                .iter()
                .enumerate()
                .map(|(idx, name)| LampInfo::new((idx + 1).to_string(), name.as_ref()))
                .collect(),
        )
    }

    pub fn state(&self, id: &LampId) -> Option<&LampState> {
        self.states.get(id)
    }

    pub fn state_by_name(&self, name: &str) -> Option<&LampState> {
        self.lamps
            .iter()
            .find(|l| l.name == name)
            .and_then(|l| self.states.get(&l.id))
    }

    /// Recently applied commands, oldest first.
    pub fn applied(&self) -> &VecDeque<LampCommand> {
        &self.applied
    }
}

impl LampSink for MemoryLamps {
    fn lamps(&self) -> Vec<LampInfo> {
        self.lamps.clone()
    }

    async fn apply(&mut self, command: &LampCommand) -> Result<(), LampError> {
        let state = self
            .states
            .get_mut(&command.lamp)
            .ok_or_else(|| LampError::UnknownLamp {
                id: command.lamp.to_string(),
            })?;

        let change = command.change;
        if let Some(on) = change.on {
            state.on = on;
        }
        if let Some(brightness) = change.brightness {
            state.brightness = brightness;
        }
        if let Some(hue) = change.hue {
            state.hue = hue;
        }
        if let Some(saturation) = change.saturation {
            state.saturation = saturation;
        }
        if command.transition.is_some() {
            state.transition = command.transition;
        }

        if self.applied.len() == APPLIED_HISTORY {
            self.applied.pop_front();
        }
        self.applied.push_back(command.clone());
        Ok(())
    }
}
