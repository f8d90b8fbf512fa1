//! src/model/seed.rs
//! ============================================================================
//! # Seed library
//!
//! The demo library the binary starts with. Nothing is persisted; every run
//! starts from this state.

use chrono::{DateTime, Duration, Utc};

use crate::model::{
    album::{Album, AlbumId, AlbumIndex},
    file_record::{FileId, FileKind, FileRecord, Folder},
    file_store::FileStore,
    library::Library,
    quick_access::QuickAccessIndex,
};

const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;

pub const DEFAULT_ALBUM: &str = "ak";

/// Root label of the file manager breadcrumb.
pub const DEVICE_STORAGE: &str = "Device Storage";

#[must_use]
pub fn seed_library(now: DateTime<Utc>) -> Library {
    let ak = AlbumId::from(DEFAULT_ALBUM);
    let mut albums = AlbumIndex::new();
    albums.insert(Album {
        id: ak.clone(),
        name: "AK".into(),
    });

    let days_ago = |days: i64| now - Duration::days(days);

    let mut files = vec![
        FileRecord::new("1", "3D Model.obj", FileKind::Model3d).with_size(12 * MB + 410 * KB),
        FileRecord::new("2", "Project Brief.docx", FileKind::Document).with_size(245 * KB),
        FileRecord::new("3", "Sales Presentation.pptx", FileKind::Presentation)
            .with_size(5 * MB + 205 * KB),
        FileRecord::new("4", "Budget 2024.xlsx", FileKind::Spreadsheet)
            .with_size(MB + 102 * KB)
            .starred(),
        FileRecord::new("5", "Design Specs.docx", FileKind::Document).with_size(320 * KB),
        FileRecord::new("6", "Iceland Cliff.jpg", FileKind::Image)
            .with_size(2 * MB + 307 * KB)
            .with_album(ak.clone())
            .with_thumbnail(
                "https://images.unsplash.com/photo-1490108108823-dea4e4a59d0c?w=400&h=300&fit=crop",
            ),
        FileRecord::new("7", "Product Demo.mp4", FileKind::Video)
            .with_size(45 * MB + 819 * KB)
            .with_url(
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
            ),
        FileRecord::new("8", "Winter Bench.jpg", FileKind::Image)
            .with_size(MB + 819 * KB)
            .with_album(ak)
            .with_thumbnail(
                "https://images.unsplash.com/photo-1516655855035-d5215bcb5604?w=400&h=300&fit=crop",
            ),
        FileRecord::new("9", "Background Music.mp3", FileKind::Audio)
            .with_size(4 * MB + 205 * KB)
            .with_url("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3"),
        FileRecord::new("10", "Financial-Report-Q2.xlsx", FileKind::Spreadsheet)
            .with_size(870 * KB),
        FileRecord::new("11", "Galleria Installer.apk", FileKind::Package).with_size(18 * MB),
    ];

    for (offset, record) in files.iter_mut().enumerate() {
        record.modified_at = Some(days_ago(offset as i64 * 3 + 1));
    }

    let mut quick_access = QuickAccessIndex::new();
    quick_access.toggle(&FileId::from("10"));

    let folders = ["Android", "DCIM", "Documents", "Download", "Movies", "Music"]
        .iter()
        .map(|name| Folder::new(&name.to_lowercase(), name))
        .collect();

    Library::from_parts(FileStore::from_records(files), albums, quick_access, folders)
}

/// Starting text for the editor when a file has no saved edit yet.
#[must_use]
pub fn document_content(name: &str) -> &'static str {
    match name {
        "Project Brief.docx" => PROJECT_BRIEF,
        "Design Specs.docx" => DESIGN_SPECS,
        _ => "",
    }
}

const PROJECT_BRIEF: &str = "PROJECT BRIEF

Project Name: Website Redesign 2024
Date: December 15, 2024

EXECUTIVE SUMMARY
This document outlines the plan for redesigning our corporate website to
improve user experience and mobile responsiveness.

OBJECTIVES
- Improve user engagement by 40%
- Reduce bounce rate by 25%
- Increase mobile traffic conversion by 50%
";

const DESIGN_SPECS: &str = "DESIGN SPECIFICATIONS

Typography: Inter for headings, Georgia for body copy.
Grid: 12 columns, 24px gutters.
Palette: deep navy primary, warm sand accent.
";
