use crate::modules::name_tallies::use_cases::append_name_tally::command::AppendNameTally;

pub struct AppendNameTallyBuilder {
    inner: AppendNameTally,
}

impl Default for AppendNameTallyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AppendNameTallyBuilder {
    pub fn new() -> Self {
        Self {
            inner: AppendNameTally {
                name: "Alice".to_string(),
                tally: 3,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn tally(mut self, v: i64) -> Self {
        self.inner.tally = v;
        self
    }

    pub fn build(self) -> AppendNameTally {
        self.inner
    }
}

#[cfg(test)]
mod append_name_tally_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = AppendNameTallyBuilder::default().build();
        assert_eq!(built.name, "Alice");
        assert_eq!(built.tally, 3);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = AppendNameTallyBuilder::new().name("Bob").tally(5).build();
        assert_eq!(custom.name, "Bob");
        assert_eq!(custom.tally, 5);
    }
}
