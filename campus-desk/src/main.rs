use anyhow::Result;
use campus_desk::backend::domain::export_service::table_to_csv;
use campus_desk::backend::io::{DirectoryDownloader, HeadlessHost};
use campus_desk::backend::Backend;
use campus_desk::config::DeskConfig;
use log::{error, info};
use shared::{AddStudentRequest, Difficulty, LessonPlanRequest, Module, Panel, QuizRequest, TableView};
use std::path::PathBuf;

fn main() {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(DeskConfig::default_path);

    let config = match DeskConfig::load_or_create(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config {:?}: {}", config_path, e);
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter.as_str())).init();
    info!("Starting Campus Desk headless runner");

    if let Err(e) = run(&config) {
        error!("Campus Desk run failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &DeskConfig) -> Result<()> {
    let mut backend = Backend::new(config)?;
    let export_directory = config.export_directory();
    let mut host = HeadlessHost::with_downloader(DirectoryDownloader::new(&export_directory));

    // ERP dashboard
    let erp = &mut backend.erp_service;
    erp.load_demo_data(&mut host);
    let kpis = erp.kpis();
    info!(
        "KPIs: budget {}, staff {}, inventory items {}",
        kpis.formatted_budget, kpis.staff_count, kpis.inventory_quantity
    );
    erp.add_student(
        AddStudentRequest {
            name: Some("Neha Iyer".to_string()),
            grade: Some("8".to_string()),
            roll: Some("08B".to_string()),
            parent: Some("R. Iyer".to_string()),
        },
        &mut host,
    );
    erp.filter_students("8", &mut host);
    erp.switch_module(Module::Students);
    if let Some(table) = erp.rendered_table(TableView::Students) {
        println!("Grade 8 students:\n{}\n", table_to_csv(table));
    }
    erp.export_visible_table(&mut host)?;
    erp.download_report(&mut host)?;
    erp.download_sample_report(&mut host)?;

    // Attendance tracker
    backend.attendance_service.initialize(&mut host)?;
    info!("Attendance sheet holds {} records", backend.attendance_service.load()?.len());

    // Teacher assistant
    let assistant = &mut backend.assistant_service;
    assistant.initialize(&mut host);
    let plan = assistant.generate_lesson(
        &LessonPlanRequest {
            topic: "Photosynthesis".to_string(),
            grade: "Grade 7".to_string(),
            duration: "45".to_string(),
            focus: "explain how leaves make food".to_string(),
        },
        &mut host,
    );
    println!("{}\n", plan);

    assistant.generate_quiz(
        &QuizRequest {
            topic: "Photosynthesis and stomata".to_string(),
            count: "5".to_string(),
            difficulty: Difficulty::Medium,
        },
        &mut host,
    );
    assistant.grade_sample_answers(&mut host);
    println!("{}\n", assistant.panel_text(Panel::QuizOutput));

    assistant.chat_ask("What are stomata?", &mut host);
    assistant.chat_ask("Why is photosynthesis important?", &mut host);
    if let Some(summary) = assistant.summarize_doubts(&mut host) {
        println!("{}\n", summary);
    }

    assistant.add_resource("Leaf structure diagram", "photosynthesis, biology", &mut host);
    assistant.suggest_resources(&mut host);

    assistant.download_sample_csv(&mut host)?;
    assistant.download_pitch(&mut host)?;

    for path in host.downloader.written() {
        println!("Wrote {}", path.display());
    }
    info!("Exports written to {:?}", export_directory);
    Ok(())
}
