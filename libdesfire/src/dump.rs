// libdesfire/src/dump.rs

//! Human readable reports of a card's version, keys and applications.
//!
//! The dumps only consume decoded structures; per-item failures inside an
//! application (a file that cannot be read, a key without version) are
//! written into the report instead of aborting it.

use crate::device::{Device, Initialized};
use crate::protocol::responses::{FileKind, FileSettings, VersionBlock, VersionInfo};
use crate::status::StatusCode;
use crate::tag::Tag;
use crate::types::{Aid, CommunicationMode, FileId, FileType};
use crate::utils::bytes_to_hex_upper_spaced;
use crate::{Error, Result};

const RULE: &str = "-------------------------------------------------------------";
const SUB_RULE: &str = "  ----------------------------------------------------------";

fn header(out: &mut String, title: &str) {
    let mut line = format!("-- {} ", title);
    while line.len() < RULE.len() {
        line.push('-');
    }
    out.push_str(&line);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
}

fn field(out: &mut String, indent: usize, label: &str, value: impl std::fmt::Display) {
    let pad = 19usize.saturating_sub(indent - 2);
    out.push_str(&format!(
        "{:indent$}{:<pad$}: {}\n",
        "",
        label,
        value,
        indent = indent,
        pad = pad
    ));
}

/// Marketing name of the card generation, from the hardware major version.
pub fn card_type(hardware: &VersionBlock) -> Option<String> {
    let base = match hardware.version_major {
        0x00 => "MIFARE DESFire (MF3ICD40)",
        0x01 => "MIFARE DESFire EV1",
        0x12 => "MIFARE DESFire EV2",
        _ => return None,
    };
    let size = match hardware.storage_size {
        0x16 => " 2K",
        0x18 => " 4K",
        0x1A => " 8K",
        _ => "",
    };
    Some(format!("{}{}", base, size))
}

fn write_block(out: &mut String, title: &str, block: &VersionBlock) {
    out.push_str(SUB_RULE);
    out.push('\n');
    out.push_str(&format!("  {}\n", title));
    let vendor = if block.is_nxp() {
        format!("{:#04X} (NXP)", block.vendor_id)
    } else {
        format!("{:#04X}", block.vendor_id)
    };
    field(out, 6, "Vendor ID", vendor);
    field(out, 6, "Type", format!("{:#04X}", block.kind));
    field(out, 6, "Subtype", format!("{:#04X}", block.subtype));
    field(
        out,
        6,
        "Version",
        format!("{}.{}", block.version_major, block.version_minor),
    );
    let storage = match block.storage_bytes() {
        Some(bytes) => format!("{:#04X} ({} bytes)", block.storage_size, bytes),
        None => format!("{:#04X}", block.storage_size),
    };
    field(out, 6, "Storage size", storage);
    field(out, 6, "Protocol", format!("{:#04X}", block.protocol));
}

/// Render a GetVersion result. Parts the card did not send are reported
/// as not obtained.
pub fn dump_version(info: &VersionInfo) -> String {
    let mut out = String::new();
    header(&mut out, "Desfire Information");

    if let Some(name) = card_type(&info.hardware) {
        field(&mut out, 2, "Card type", name);
    }
    match &info.production {
        Some(p) => {
            field(&mut out, 2, "UID", bytes_to_hex_upper_spaced(&p.uid));
            field(
                &mut out,
                2,
                "Batch number",
                bytes_to_hex_upper_spaced(&p.batch_number),
            );
            field(
                &mut out,
                2,
                "Production week",
                format!("{:#04X}", p.production_week),
            );
            field(
                &mut out,
                2,
                "Production year",
                format!("{:#04X}", p.production_year),
            );
        }
        None => field(&mut out, 2, "UID", "not obtained"),
    }

    write_block(&mut out, "Hardware Information", &info.hardware);
    match &info.software {
        Some(sw) => write_block(&mut out, "Software Information", sw),
        None => {
            out.push_str(SUB_RULE);
            out.push_str("\n  Software Information: not obtained\n");
        }
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Render the settings of one file.
pub fn dump_file_settings(file: FileId, settings: &FileSettings) -> String {
    let mut out = String::new();
    let file_type = settings.file_type();
    field(&mut out, 6, "File ID", format!("{:#04X}", file.as_u8()));
    field(
        &mut out,
        6,
        "File Type",
        format!("{:#04X} ({})", file_type as u8, file_type),
    );
    let mode: CommunicationMode = settings.communication_mode;
    field(
        &mut out,
        6,
        "Communication",
        format!("{:#04X} ({})", mode.as_u8(), mode),
    );
    field(
        &mut out,
        6,
        "Access rights",
        format!("{:#06X}", settings.access_rights.as_u16()),
    );

    match settings.kind {
        FileKind::StandardData { file_size } | FileKind::BackupData { file_size } => {
            field(&mut out, 6, "File Size", format!("{} bytes", file_size));
        }
        FileKind::Value {
            lower_limit,
            upper_limit,
            limited_credit_value,
            limited_credit_enabled,
        } => {
            field(&mut out, 6, "Lower Limit", lower_limit);
            field(&mut out, 6, "Upper Limit", upper_limit);
            field(&mut out, 6, "Limited credit", limited_credit_value);
            field(
                &mut out,
                6,
                "Limited credit",
                if limited_credit_enabled {
                    "Enabled"
                } else {
                    "Disabled"
                },
            );
        }
        FileKind::LinearRecord(r) | FileKind::CyclicRecord(r) => {
            field(&mut out, 6, "Record size", r.record_size);
            field(&mut out, 6, "max num records", r.max_records);
            field(&mut out, 6, "num records", r.current_records);
        }
    }
    out
}

/// Short description of a failed call for inline reporting.
fn describe(err: &Error) -> String {
    match err {
        Error::Application { status, .. } => status.name().to_string(),
        other => other.to_string(),
    }
}

fn write_key_versions(
    out: &mut String,
    tag: &mut Tag,
    device: &mut Device<Initialized>,
    max_keys: u8,
) {
    if max_keys == 0 {
        return;
    }
    out.push_str(SUB_RULE);
    out.push_str("\n  Key Versions\n");
    for key in 0..max_keys {
        let value = match tag.get_key_version(device, key) {
            Ok(version) => format!("{:#04X}", version),
            Err(e) => describe(&e),
        };
        field(out, 6, &format!("Key {:#04X}", key), value);
    }
}

/// Select the PICC level and report the master key settings and versions.
pub fn dump_master_key(tag: &mut Tag, device: &mut Device<Initialized>) -> Result<String> {
    let mut out = String::new();
    header(&mut out, "Desfire Master Key");

    tag.select_application(device, Aid::MASTER)?;
    match tag.get_key_settings(device) {
        Ok(ks) => {
            field(&mut out, 2, "Key settings", format!("{:#04X}", ks.settings));
            field(&mut out, 2, "Max num keys", ks.max_keys());
            write_key_versions(&mut out, tag, device, ks.max_keys());
        }
        Err(e) => {
            out.push_str("  Error: Failed to get application key settings.\n");
            out.push_str(&format!("  {}\n", describe(&e)));
        }
    }
    out.push_str(RULE);
    out.push('\n');
    Ok(out)
}

fn write_file_content(
    out: &mut String,
    tag: &mut Tag,
    device: &mut Device<Initialized>,
    file: FileId,
    settings: &FileSettings,
) {
    match settings.file_type() {
        FileType::StandardData | FileType::BackupData => {
            let size = settings.file_size().unwrap_or(0);
            out.push_str("      ------------------------------------------------------\n");
            out.push_str("      Data\n");
            if size == 0 {
                return;
            }
            match tag.read_data(device, file, 0, size) {
                Ok(data) => {
                    for chunk in data.chunks(16) {
                        out.push_str(&format!(
                            "            {}\n",
                            bytes_to_hex_upper_spaced(chunk)
                        ));
                    }
                }
                Err(e) => out.push_str(&format!("           {}\n", describe(&e))),
            }
        }
        FileType::ValueWithBackup => {
            let value = match tag.get_value(device, file) {
                Ok(v) => v.to_string(),
                Err(e) => describe(&e),
            };
            field(out, 6, "Value", value);
        }
        FileType::LinearRecordWithBackup | FileType::CyclicRecordWithBackup => {}
    }
}

/// Select `aid` and report its keys, files, file settings and the content
/// of data and value files.
///
/// Failing to select the application or to list its files is returned as
/// an error; everything else is reported inline.
pub fn dump_application(
    tag: &mut Tag,
    device: &mut Device<Initialized>,
    aid: Aid,
) -> Result<String> {
    let mut out = String::new();
    header(&mut out, "Desfire Application");
    field(&mut out, 2, "AID", bytes_to_hex_upper_spaced(aid.as_bytes()));

    tag.select_application(device, aid)?;

    let max_keys = match tag.get_key_settings(device) {
        Ok(ks) => {
            field(&mut out, 2, "Key settings", format!("{:#04X}", ks.settings));
            field(&mut out, 2, "Max num keys", ks.max_keys());
            ks.max_keys()
        }
        Err(e) => {
            out.push_str("  Error: Failed to get application key settings.\n");
            out.push_str(&format!("  {}\n", describe(&e)));
            0
        }
    };

    let files = tag.get_file_ids(device)?;
    field(&mut out, 2, "Num. Files", files.len());
    write_key_versions(&mut out, tag, device, max_keys);

    for file in files {
        out.push_str(SUB_RULE);
        out.push_str("\n  File Information\n");
        match tag.get_file_settings(device, file) {
            Ok(settings) => {
                out.push_str(&dump_file_settings(file, &settings));
                write_file_content(&mut out, tag, device, file, &settings);
            }
            Err(e) => {
                field(&mut out, 6, "File ID", format!("{:#04X}", file.as_u8()));
                out.push_str("      Error: Failed to get file settings.\n");
                out.push_str(&format!("      {}\n", describe(&e)));
            }
        }
    }

    out.push_str(RULE);
    out.push('\n');
    Ok(out)
}

/// Status name as shown in the dumps, for callers reporting their own
/// failures in the same style.
pub fn status_line(status: StatusCode) -> String {
    format!("{} ({:#04X})", status.name(), status.as_u8())
}
