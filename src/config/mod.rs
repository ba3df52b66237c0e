/*!
Configuration of a context.

All configuration for a context is contained within a [Config], made of [ConfigOption]s.
Each option has a name, used when reporting an attempt to set a value outside of the bounds of the option.

```rust
# use tern_sat::config::Config;
# use std::time::Duration;
let mut config = Config::default();

assert!(config.conflict_limit.set(1_000).is_ok());
assert!(config.time_limit.set(Duration::from_secs(30)).is_ok());
assert!(config.assertion_check.set(false).is_ok());
```
*/

mod config_option;
pub use config_option::ConfigOption;

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// After a conflict, check the added clause asserts some literal following the backjump.
    pub assertion_check: ConfigOption<bool>,

    /// The number of conflicts after which a solve is abandoned.
    /// A limit of zero places no limit on the conflicts of a solve.
    pub conflict_limit: ConfigOption<usize>,

    /// The time after which a solve is abandoned.
    /// A limit of zero places no limit on the time of a solve.
    pub time_limit: ConfigOption<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            assertion_check: ConfigOption {
                name: "assertion_check",
                min: false,
                max: true,
                value: true,
            },

            conflict_limit: ConfigOption {
                name: "conflict_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::ZERO,
                max: Duration::MAX,
                value: Duration::ZERO,
            },
        }
    }
}

impl Config {
    /// The conflict limit, if some limit is set.
    pub fn conflict_bound(&self) -> Option<usize> {
        match self.conflict_limit.value {
            0 => None,
            limit => Some(limit),
        }
    }

    /// The time limit, if some limit is set.
    pub fn time_bound(&self) -> Option<Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }
}
