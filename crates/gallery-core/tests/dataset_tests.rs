// Host-side tests for coordinate and file list ingestion.

use gallery_core::dataset::{parse_coords, parse_file_list};
use gallery_core::{Dataset, GalleryError};
use glam::Vec2;

#[test]
fn header_is_skipped_and_rows_align_by_position() {
    let ds = Dataset::from_sources("index,x,y\n7,1.5,2\n3,3,4\n", "a.jpg\nb.jpg\n");
    assert!(ds.errors.is_empty());
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.rows[0].index, 0);
    assert_eq!(ds.rows[0].raw, Vec2::new(1.5, 2.0));
    assert_eq!(ds.rows[0].path, "a.jpg");
    assert_eq!(ds.rows[1].index, 1);
    assert_eq!(ds.rows[1].path, "b.jpg");
}

#[test]
fn headerless_input_keeps_its_first_row() {
    let ds = Dataset::from_sources("0,1,2\r\n1,3,4\r\n", "a\r\nb\r\n");
    assert!(ds.errors.is_empty());
    assert_eq!(ds.raw_points().collect::<Vec<_>>(), vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
}

#[test]
fn malformed_rows_are_skipped_without_shifting_later_rows() {
    let csv = "index,x,y\n0,1,1\n1,oops,2\n2,3,3\n3,4\n4,inf,1\n5,6,6\n";
    let files = "a\nb\nc\nd\ne\nf\n";
    let ds = Dataset::from_sources(csv, files);
    let paths: Vec<&str> = ds.rows.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["a", "c", "f"]);
    assert_eq!(ds.rows.iter().map(|r| r.index).collect::<Vec<_>>(), vec![0, 2, 5]);
    assert_eq!(ds.errors.len(), 3);
    assert!(matches!(ds.errors[0], GalleryError::DataFormat { line: 3, .. }));
}

#[test]
fn malformed_first_row_is_not_a_header() {
    let (rows, errors, data_lines) = parse_coords("0,abc,1\n1,2,3\n");
    assert_eq!(data_lines, 2);
    assert_eq!(errors.len(), 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].index, 1);
}

#[test]
fn count_mismatch_truncates_to_the_shorter_list() {
    let ds = Dataset::from_sources("0,0,0\n1,1,1\n2,2,2\n", "a\nb\n");
    assert_eq!(ds.len(), 2);
    assert_eq!(
        ds.errors,
        vec![GalleryError::CountMismatch {
            coords: 3,
            files: 2
        }]
    );

    let ds = Dataset::from_sources("0,0,0\n", "a\nb\nc\n");
    assert_eq!(ds.len(), 1);
    assert!(matches!(
        ds.errors[..],
        [GalleryError::CountMismatch { coords: 1, files: 3 }]
    ));
}

#[test]
fn file_list_ignores_blank_lines_and_whitespace() {
    assert_eq!(
        parse_file_list("  thumbs/a.jpg \n\n\tthumbs/b.jpg\n   \n"),
        vec!["thumbs/a.jpg".to_owned(), "thumbs/b.jpg".to_owned()]
    );
}

#[test]
fn empty_sources_give_an_empty_dataset() {
    let ds = Dataset::from_sources("", "");
    assert!(ds.is_empty());
    assert!(ds.errors.is_empty());
    let ds = Dataset::from_sources("index,x,y\n", "");
    assert!(ds.is_empty());
    assert!(ds.errors.is_empty());
}
