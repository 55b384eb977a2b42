use fixturize::{Fixture, Sampleable};

#[derive(Fixture)]
pub struct Account {
    pub id: String,
    #[fixture(default)]
    pub balance: i64,
    pub tags: Vec<String>,
}

fn main() {
    let account = Account::fixture_with(|a| a.tags.push("new".to_owned()));
    assert_eq!(account.tags.len(), 1);
    assert_eq!(Account::sample().balance, 0);
    let _ = AccountFixtureBuilder::new();
}
