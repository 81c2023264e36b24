use campus_desk::backend::domain::attendance_service::ATTENDANCE_KEY;
use campus_desk::backend::domain::FixedClock;
use campus_desk::backend::io::{DirectoryDownloader, HeadlessHost};
use campus_desk::backend::storage::{JsonFileStorage, KeyValueStorage, MemoryStorage};
use campus_desk::backend::Backend;
use campus_desk::config::DeskConfig;
use chrono::NaiveDate;
use shared::{AddInventoryRequest, AddStudentRequest, Difficulty, Module, QuizRequest, TableView};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()))
}

fn memory_backend() -> (Backend, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let backend = Backend::with_parts(&DeskConfig::default(), storage.clone(), clock());
    (backend, storage)
}

#[test]
fn test_demo_finance_kpis() {
    let (mut backend, _storage) = memory_backend();
    let mut host = HeadlessHost::new();

    backend.erp_service.load_demo_data(&mut host);

    let kpis = host.renderer.kpis().unwrap();
    assert_eq!(kpis.net_balance, 88000.0);
    assert_eq!(kpis.formatted_budget, "₹ 88,000");
    assert_eq!(kpis.staff_count, 3);
    assert_eq!(kpis.inventory_quantity, 132.0);
}

#[test]
fn test_add_student_then_clear_and_reset() {
    let (mut backend, _storage) = memory_backend();
    let mut host = HeadlessHost::new();
    let erp = &mut backend.erp_service;
    erp.load_demo_data(&mut host);

    let added = erp.add_student(
        AddStudentRequest {
            name: None,
            grade: Some("10".to_string()),
            roll: None,
            parent: None,
        },
        &mut host,
    );
    assert_eq!(added.id, 4);
    assert_eq!(added.name, "Student");

    erp.clear(TableView::Students, &mut host);
    assert_eq!(erp.students().len(), 0);

    assert!(erp.reset_demo(&mut host));
    assert_eq!(erp.students().len(), 3);
}

#[test]
fn test_quiz_over_two_keywords() {
    let (mut backend, _storage) = memory_backend();
    let mut host = HeadlessHost::new();

    let quiz = backend.assistant_service.generate_quiz(
        &QuizRequest {
            topic: "stomata and photosynthesis".to_string(),
            count: "5".to_string(),
            difficulty: Difficulty::Easy,
        },
        &mut host,
    );

    assert_eq!(quiz.len(), 5);
    for item in quiz {
        assert_eq!(item.options.len(), 4);
        assert_eq!(item.correct_option_index, 0);
    }
}

#[test]
fn test_attendance_seeds_once_and_clear_removes_key() {
    let (backend, storage) = memory_backend();
    let mut host = HeadlessHost::new();
    let attendance = &backend.attendance_service;

    attendance.initialize(&mut host).unwrap();
    attendance.initialize(&mut host).unwrap();
    assert_eq!(attendance.load().unwrap().len(), 5);
    assert_eq!(attendance.load().unwrap()[0].date, "10/1/2025");

    assert!(attendance.clear(&mut host).unwrap());
    assert_eq!(storage.get_item(ATTENDANCE_KEY).unwrap(), None);
    assert!(host.renderer.table(TableView::Attendance).unwrap().is_empty());
}

#[test]
fn test_attendance_persists_in_json_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("storage.json");
    let mut host = HeadlessHost::new();

    let storage = Arc::new(JsonFileStorage::new(&path).unwrap());
    let backend = Backend::with_parts(&DeskConfig::default(), storage, clock());
    backend.attendance_service.initialize(&mut host).unwrap();

    let reopened = Arc::new(JsonFileStorage::new(&path).unwrap());
    let backend = Backend::with_parts(&DeskConfig::default(), reopened, clock());
    assert_eq!(backend.attendance_service.load().unwrap().len(), 5);
}

#[test]
fn test_visible_table_export_strips_commas() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (mut backend, _storage) = memory_backend();
    let mut host = HeadlessHost::with_downloader(DirectoryDownloader::new(temp_dir.path().join("exports")));
    let erp = &mut backend.erp_service;
    erp.load_demo_data(&mut host);

    erp.add_item(
        AddInventoryRequest {
            item: Some("Pens, blue".to_string()),
            category: Some("Stationery".to_string()),
            qty: "1,000".to_string(),
            location: Some("Store A, shelf 2".to_string()),
        },
        &mut host,
    );
    erp.switch_module(Module::Inventory);
    erp.filter_inventory("Stationery", &mut host);

    assert!(erp.export_visible_table(&mut host).unwrap());

    let written = fs::read_to_string(temp_dir.path().join("exports").join("erp_table_export.csv")).unwrap();
    assert_eq!(
        written,
        "ID,Item,Category,Qty,Location\n4,Pens blue,Stationery,0,Store A shelf 2\n1,Whiteboard markers,Stationery,120,Store A"
    );
}
