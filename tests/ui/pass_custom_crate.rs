mod samples {
    pub use fixturize::Sampleable;
}

#[derive(fixturize::Fixture)]
#[fixture(crate = crate::samples)]
pub struct Tagged {
    pub tag: char,
}

fn main() {
    assert_eq!(Tagged::fixture().tag, 'a');
}
