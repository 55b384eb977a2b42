use fixturize::Fixture;

#[derive(Fixture)]
#[fixture(debug_only)]
pub struct Probe {
    pub reading: f32,
}

fn main() {
    #[cfg(debug_assertions)]
    assert_eq!(Probe::fixture().reading, 0.0);
}
