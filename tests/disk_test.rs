mod common;
use common::*;
use mikeos_basic::dev::VirtualDisk;

fn disk() -> VirtualDisk {
    let mut disk = VirtualDisk::new();
    disk.insert("HELLO.TXT", b"Hello");
    disk.insert("OTHER.TXT", b"Other file");
    disk
}

#[test]
fn test_save_and_size() {
    let mut m = machine_with_disk(disk());
    m.enter("$1 = \"SAVED\"");
    m.enter("SAVE \"OUT.TXT\" & $1 5");
    assert_eq!(m.numeric('R'), 0);
    assert!(m.runtime.env().disk.file_exists("OUT.TXT"));
    m.enter("SIZE \"OUT.TXT\"");
    assert_eq!(m.numeric('R'), 0);
    assert_eq!(m.numeric('S'), 5);
}

#[test]
fn test_save_never_overwrites() {
    let mut m = machine_with_disk(disk());
    m.enter("SAVE \"HELLO.TXT\" 32768 2");
    assert_eq!(m.numeric('R'), 2);
    assert_eq!(m.runtime.env().disk.file_size("HELLO.TXT").unwrap(), 5);
}

#[test]
fn test_load() {
    let mut m = machine_with_disk(disk());
    m.enter("LOAD \"hello.txt\" 40000");
    assert_eq!(m.numeric('R'), 0);
    assert_eq!(m.numeric('S'), 5);
    m.enter("PEEK A 40000");
    assert_eq!(m.numeric('A'), 'H' as u16);
    m.enter("LOAD \"MISSING.TXT\" 40000");
    assert_eq!(m.numeric('R'), 1);
}

#[test]
fn test_rename() {
    let mut m = machine_with_disk(disk());
    m.enter("RENAME \"HELLO.TXT\" \"HI.TXT\"");
    assert_eq!(m.numeric('R'), 0);
    m.enter("RENAME \"HELLO.TXT\" \"X.TXT\"");
    assert_eq!(m.numeric('R'), 2);
    m.enter("RENAME \"HI.TXT\" \"OTHER.TXT\"");
    assert_eq!(m.numeric('R'), 3);
}

#[test]
fn test_delete() {
    let mut m = machine_with_disk(disk());
    m.enter("DELETE \"HELLO.TXT\"");
    assert_eq!(m.numeric('R'), 0);
    m.enter("DELETE \"HELLO.TXT\"");
    assert_eq!(m.numeric('R'), 2);
}

#[test]
fn test_write_protected() {
    let mut protected = disk();
    protected.set_read_only(true);
    let mut m = machine_with_disk(protected);
    m.enter("SAVE \"NEW.TXT\" 32768 2");
    assert_eq!(m.numeric('R'), 1);
    m.enter("DELETE \"HELLO.TXT\"");
    assert_eq!(m.numeric('R'), 1);
    assert!(m.errors().is_empty());
}

#[test]
fn test_size_missing() {
    let mut m = machine_with_disk(disk());
    m.enter("SIZE \"NOPE\"");
    assert_eq!(m.numeric('R'), 1);
}

#[test]
fn test_files() {
    let mut d = VirtualDisk::new();
    for name in ["A.BAS", "B.BAS", "C.BAS", "D.BAS", "E.BAS", "F.BAS"].iter() {
        d.insert(name, b"");
    }
    let mut m = machine_with_disk(d);
    m.enter("FILES");
    let row: String = ["A.BAS", "B.BAS", "C.BAS", "D.BAS", "E.BAS"]
        .iter()
        .map(|n| format!("{:<15}", n))
        .collect();
    assert_eq!(m.output(), format!("{}\n{:<15}\n", row, "F.BAS"));
}

#[test]
fn test_askfile() {
    let mut m = machine_with_disk(disk());
    m.screen.borrow_mut().choices.push_back(2);
    m.enter("ASKFILE $1");
    assert_eq!(m.string("$1"), "OTHER.TXT");
    m.enter("ASKFILE $2");
    assert_eq!(m.string("$2"), "");
}
