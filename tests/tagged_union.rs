//! Derived fixtures for enums.

use fixturize::{Fixture, Sampleable};

#[derive(Debug, PartialEq, Fixture)]
pub enum Status {
    Active,
    Inactive,
}

#[derive(Debug, Fixture)]
pub enum Outcome {
    Success(String),
    Failure(std::io::Error),
}

#[derive(Debug, PartialEq, Fixture)]
enum Shape {
    Rect { width: u32, height: u32 },
    Circle(f64),
}

#[derive(Debug, PartialEq, Fixture)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

#[derive(Debug, PartialEq, Fixture)]
pub struct Job {
    pub name: String,
    pub status: Status,
}

#[test]
fn test_first_case_is_the_sample() {
    assert_eq!(Status::fixture(), Status::Active);
    assert_eq!(Status::sample(), Status::Active);
}

#[test]
fn test_payload_is_sampled() {
    match Outcome::fixture() {
        Outcome::Success(message) => assert_eq!(message, ""),
        other => panic!("expected the first variant, got {other:?}"),
    }
}

#[test]
fn test_labeled_payload_is_sampled() {
    assert_eq!(
        Shape::fixture(),
        Shape::Rect {
            width: 0,
            height: 0
        }
    );
}

#[test]
fn test_later_cases_need_no_samples() {
    // `File` has no sample; only `Left` is ever built.
    let either = Either::<u8, std::fs::File>::fixture();
    assert!(matches!(either, Either::Left(0)));
}

#[test]
fn test_enum_fields_in_records() {
    let job = Job::fixture_with(|j| j.status = Status::Inactive);
    assert_eq!(job.status, Status::Inactive);
    assert_eq!(Job::fixture().status, Status::Active);
}
