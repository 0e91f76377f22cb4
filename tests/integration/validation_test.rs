// Input Validation Integration Tests
//
// Exercises the text validators end to end, including the text round trip

use anyhow::Result;
use ossim::disk::format_request_queue;
use ossim::memory::{format_reference_sequence, MAX_FRAME_COUNT};
use ossim::{validate_disk_input, validate_memory_input, InputField, ValidationError};

#[test]
fn test_memory_rejections() {
    let cases = [
        ("0", "1 2", InputField::FrameCount),
        ("-5", "1 2", InputField::FrameCount),
        ("abc", "1 2", InputField::FrameCount),
        ("4000000000", "1 2", InputField::FrameCount),
        ("3", "", InputField::ReferenceString),
        ("3", "1 -2 3", InputField::ReferenceString),
        ("3", "1 2.5", InputField::ReferenceString),
    ];
    for (frames, refs, field) in cases {
        let err = validate_memory_input(frames, refs).unwrap_err();
        assert_eq!(err.field(), field, "frames={:?} refs={:?}", frames, refs);
        assert!(!err.to_string().is_empty());
    }
}

#[test]
fn test_frame_count_limit() -> Result<()> {
    let limit = MAX_FRAME_COUNT.to_string();
    assert_eq!(validate_memory_input(&limit, "1 2")?.frame_count(), MAX_FRAME_COUNT);

    let over = (MAX_FRAME_COUNT + 1).to_string();
    assert_eq!(
        validate_memory_input(&over, "1 2").unwrap_err(),
        ValidationError::TooLarge { field: InputField::FrameCount, token: over.clone() }
    );
    Ok(())
}

#[test]
fn test_disk_rejections() {
    let cases = [
        ("abc", "1", "1", InputField::CylinderCount),
        ("100", "100", "1", InputField::HeadPosition),
        ("100", "x", "1", InputField::HeadPosition),
        ("100", "10", "", InputField::RequestQueue),
        ("100", "10", "1, 2, 100", InputField::RequestQueue),
        ("100", "10", "1, two", InputField::RequestQueue),
    ];
    for (cylinders, head, queue, field) in cases {
        let err = validate_disk_input(cylinders, head, queue).unwrap_err();
        assert_eq!(err.field(), field, "{:?} {:?} {:?}", cylinders, head, queue);
    }
}

#[test]
fn test_out_of_range_message_names_range() {
    let err = validate_disk_input("50", "0", "49, 50").unwrap_err();
    assert_eq!(
        err,
        ValidationError::OutOfRange { field: InputField::RequestQueue, value: 50, max: 49 }
    );
    assert_eq!(
        err.to_string(),
        "Invalid request queue: 50 is out of range, valid range is [0, 49]"
    );
}

#[test]
fn test_memory_round_trip() -> Result<()> {
    let workload = validate_memory_input("3", " 7  0 1\t2 0 ")?;
    let again = validate_memory_input(
        &workload.frame_count().to_string(),
        &format_reference_sequence(workload.references()),
    )?;
    assert_eq!(workload, again);
    Ok(())
}

#[test]
fn test_disk_round_trip() -> Result<()> {
    let workload = validate_disk_input("200", "50", "82,170 , 43,50,50")?;
    let again = validate_disk_input(
        &workload.cylinder_count().to_string(),
        &workload.start().to_string(),
        &format_request_queue(workload.requests()),
    )?;
    assert_eq!(workload, again);
    Ok(())
}
