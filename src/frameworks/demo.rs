// Scripted input for the headless demo driver. Real input mapping lives in the client.

use crate::domain::state::InputFlags;
use crate::interface_adapters::protocol::ScriptStepDto;
use crate::use_cases::InputSource;

#[derive(Debug, Clone)]
pub struct DemoScript {
    steps: Vec<(u64, InputFlags)>,
    period: u64,
}

impl DemoScript {
    pub fn new(steps: Vec<(u64, InputFlags)>) -> Self {
        let steps: Vec<_> = steps.into_iter().filter(|(ticks, _)| *ticks > 0).collect();
        let period = steps.iter().map(|(ticks, _)| ticks).sum();
        Self { steps, period }
    }

    /// Parses a JSON array of `{ "ticks": n, "<key>": bool, ... }` steps.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        let steps: Vec<ScriptStepDto> = serde_json::from_str(source)?;
        Ok(Self::new(
            steps
                .into_iter()
                .map(|step| (step.ticks, InputFlags::from(step.input)))
                .collect(),
        ))
    }

    /// Walk, shoot the dummy, hop, hover on the jetpack, then walk back into contact.
    pub fn builtin() -> Self {
        let idle = InputFlags::default();
        let right = InputFlags {
            right: true,
            ..idle
        };
        let left = InputFlags { left: true, ..idle };

        Self::new(vec![
            (30, idle),
            (60, right),
            (40, InputFlags { fire: true, ..idle }),
            (1, InputFlags { jump: true, ..idle }),
            (20, idle),
            (30, InputFlags { jetpack: true, ..idle }),
            (40, idle),
            (90, left),
            (60, right),
        ])
    }

    /// Input for a tick; the script repeats once exhausted.
    pub fn input_at(&self, tick: u64) -> InputFlags {
        if self.period == 0 {
            return InputFlags::default();
        }

        let mut offset = tick % self.period;
        for (ticks, input) in &self.steps {
            if offset < *ticks {
                return *input;
            }
            offset -= ticks;
        }
        InputFlags::default()
    }
}

// Keyed on the session's own tick count, so a step never lands late.
impl InputSource for DemoScript {
    fn poll(&mut self, tick: u64, _held: InputFlags) -> InputFlags {
        self.input_at(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_tick_passes_script_end_then_script_repeats() {
        let fire = InputFlags {
            fire: true,
            ..InputFlags::default()
        };
        let script = DemoScript::new(vec![(2, InputFlags::default()), (1, fire)]);

        assert_eq!(script.input_at(0), InputFlags::default());
        assert_eq!(script.input_at(2), fire);
        assert_eq!(script.input_at(3), InputFlags::default());
        assert_eq!(script.input_at(5), fire);
    }

    #[test]
    fn when_script_is_empty_then_input_is_released() {
        let script = DemoScript::new(vec![(0, InputFlags::default())]);

        assert_eq!(script.input_at(42), InputFlags::default());
    }

    #[test]
    fn when_polled_then_input_follows_the_completed_tick_count() {
        let fire = InputFlags {
            fire: true,
            ..InputFlags::default()
        };
        let mut script = DemoScript::new(vec![(1, InputFlags::default()), (1, fire)]);

        assert_eq!(script.poll(0, fire), InputFlags::default());
        assert_eq!(script.poll(1, InputFlags::default()), fire);
    }

    #[test]
    fn when_parsed_from_json_then_steps_are_kept_in_order() {
        let source = r#"[{"ticks": 1, "jump": true}, {"ticks": 2, "left": true}]"#;
        let script = DemoScript::from_json(source).expect("script parses");

        assert!(script.input_at(0).jump);
        assert!(script.input_at(1).left);
        assert!(script.input_at(3).jump);
    }
}
