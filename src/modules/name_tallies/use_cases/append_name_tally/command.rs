#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendNameTally {
    pub name: String,
    pub tally: i64,
}
