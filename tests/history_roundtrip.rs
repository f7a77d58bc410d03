use cartwise::store::history::PurchaseHistory;
use cartwise::Session;

#[test]
fn successful_add_is_readable_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut session = Session::open(&path);
    session.process("add milk");

    let reloaded = PurchaseHistory::load(&path);
    let last = reloaded.records().last().expect("history was persisted");
    assert_eq!(last.item, "milk");
    assert_eq!(last.date, chrono::Local::now().date_naive());
}

#[test]
fn history_grows_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut first = Session::open(&path);
    first.process("add bread");
    drop(first);

    let mut second = Session::open(&path);
    second.process("add rice");

    let reloaded = PurchaseHistory::load(&path);
    let items: Vec<_> = reloaded.records().iter().map(|r| r.item.as_str()).collect();
    assert_eq!(items, vec!["bread", "rice"]);
}

#[test]
fn failed_add_leaves_the_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut session = Session::open(&path);
    session.process("please add");

    assert!(!path.exists(), "no history document without a successful add");
}
