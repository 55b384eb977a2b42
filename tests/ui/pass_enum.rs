use fixturize::Fixture;

#[derive(Debug, PartialEq, Fixture)]
pub enum Event {
    Created { id: u64, by: String },
    Deleted(u64),
}

fn main() {
    assert_eq!(
        Event::fixture(),
        Event::Created {
            id: 0,
            by: String::new()
        }
    );
}
