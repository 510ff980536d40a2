use gridweave::prelude::{EntryStatus, FileUploader};

#[test]
fn test_add_files_in_order() {
    let uploader = FileUploader::new();
    assert!(uploader.is_empty());

    let a = uploader.add_file("report.pdf", 120_000);
    let b = uploader.add_file("photo.jpg", 2_400_000);
    assert_ne!(a, b);

    let entries = uploader.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "report.pdf");
    assert_eq!(entries[0].status, EntryStatus::Queued);
    assert_eq!(entries[1].name, "photo.jpg");
}

#[test]
fn test_progress_and_done() {
    let uploader = FileUploader::new();
    let id = uploader.add_file("report.pdf", 120_000);

    uploader.set_progress(id, 40);
    assert_eq!(
        uploader.entry(id).map(|e| e.status),
        Some(EntryStatus::Uploading { percent: 40 })
    );

    // Progress is capped at 100
    uploader.set_progress(id, 250);
    assert_eq!(
        uploader.entry(id).map(|e| e.status),
        Some(EntryStatus::Uploading { percent: 100 })
    );

    uploader.mark_done(id);
    assert_eq!(uploader.entry(id).map(|e| e.status), Some(EntryStatus::Done));
}

#[test]
fn test_retry_only_failed_entries() {
    let uploader = FileUploader::new();
    let id = uploader.add_file("report.pdf", 120_000);

    // Queued entries have nothing to retry
    assert!(!uploader.retry(id));

    uploader.mark_failed(id, "connection reset");
    assert_eq!(
        uploader.entry(id).map(|e| e.status),
        Some(EntryStatus::Failed {
            reason: "connection reset".to_string()
        })
    );

    assert!(uploader.retry(id));
    assert_eq!(
        uploader.entry(id).map(|e| e.status),
        Some(EntryStatus::Queued)
    );
}

#[test]
fn test_remove() {
    let uploader = FileUploader::new();
    let id = uploader.add_file("report.pdf", 120_000);

    assert!(uploader.remove(id));
    assert!(uploader.is_empty());
    assert!(!uploader.remove(id));
}

#[test]
fn test_clear_finished_keeps_active_entries() {
    let uploader = FileUploader::new();
    let done = uploader.add_file("a.txt", 10);
    let failed = uploader.add_file("b.txt", 10);
    let queued = uploader.add_file("c.txt", 10);

    uploader.mark_done(done);
    uploader.mark_failed(failed, "timeout");
    uploader.clear_finished();

    assert_eq!(uploader.len(), 2);
    assert!(uploader.entry(done).is_none());
    assert!(uploader.entry(failed).is_some());
    assert!(uploader.entry(queued).is_some());
}

#[test]
fn test_status_updates_for_unknown_id_are_noops() {
    let uploader = FileUploader::new();
    let id = uploader.add_file("a.txt", 10);
    uploader.remove(id);

    uploader.set_progress(id, 10);
    uploader.mark_done(id);
    assert!(uploader.is_empty());
}
