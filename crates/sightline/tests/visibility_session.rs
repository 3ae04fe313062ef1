use std::fs;
use std::io::Cursor;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use sightline::Shell;

fn run_session(point_file_contents: &str, keystrokes: &str) -> String {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Points.txt");
    fs::write(&path, point_file_contents).unwrap();
    let mut output = Vec::new();
    Shell::new(Cursor::new(keystrokes.to_owned()), &mut output, &path)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn the_whole_flow_from_file_to_output_lines() {
    let transcript = run_session("0 0 1 East\n3 4 2 North\n", "1\n90\n10\nn\n");
    assert!(transcript.contains("Visible Points:\n(3,4,2,North)\n"));
}

#[test]
fn a_session_of_three_queries_reloads_the_file_each_time() {
    let points = "\
        0 0 1 North\n\
        0 5 2 East\n\
        5 0 3 West\n\
        0 -5 4 North\n";
    // id 1 faces North: sees only the point straight up; id 4 faces North
    // from below: sees ids 1 and 2 stacked above it
    let transcript = run_session(points, "1\n30\n50\ny\n4\n30\n50\ny\n3\n1\n1\nn\n");
    let result_blocks: Vec<&str> = transcript.split("Visible Points:\n").skip(1).collect();
    assert_eq!(result_blocks.len(), 3);
    assert!(result_blocks[0].starts_with("(0,5,2,East)\n\n"));
    assert!(result_blocks[1].starts_with("(0,0,1,North)\n(0,5,2,East)\n\n"));
    assert!(result_blocks[2].starts_with("\n"), "narrow query sees nothing");
}

#[test]
fn malformed_tail_of_the_point_file_does_not_break_a_query() {
    let transcript = run_session("0 0 1 East\n2 0 2 West\n9 9", "1\n45\n50\nn\n");
    assert!(transcript.contains("Visible Points:\n(2,0,2,West)\n"));
}
