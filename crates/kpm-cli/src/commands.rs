use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{debug, info};

use kpm_model::{Protokoll, export_filename};
use kpm_persistence::{DraftSlot, SequenceCounter};
use kpm_render::{to_canonical_json, to_markdown};
use kpm_taxonomy::{Taxonomie, fach_kuerzel_or_fallback};
use kpm_validate::{validate, validate_export};

use crate::cli::{
    DraftLoadArgs, DraftSaveArgs, ExportArgs, NewArgs, SetArgs, TaxonomyArgs, ValidateArgs,
};
use crate::summary::apply_table_style;

fn draft_slot(state_dir: &Path) -> DraftSlot {
    DraftSlot::new(state_dir.join("entwurf.json"))
}

fn sequence_counter(state_dir: &Path) -> SequenceCounter {
    SequenceCounter::new(state_dir.join("sequence"))
}

fn read_protokoll(path: &Path) -> Result<Protokoll> {
    let bytes =
        fs::read(path).with_context(|| format!("read protocol file {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("parse protocol file {}", path.display()))
}

fn write_protokoll(path: &Path, protokoll: &Protokoll) -> Result<()> {
    let json = to_canonical_json(protokoll).context("serialize protocol")?;
    fs::write(path, json)
        .with_context(|| format!("write protocol file {}", path.display()))?;
    Ok(())
}

fn load_taxonomie() -> Result<Taxonomie> {
    kpm_taxonomy::load().context("load subject vocabulary")
}

pub fn run_new(args: &NewArgs) -> Result<()> {
    let protokoll = Protokoll::new();
    match &args.out {
        Some(path) => {
            write_protokoll(path, &protokoll)?;
            info!(path = %path.display(), "protocol created");
        }
        None => println!("{}", to_canonical_json(&protokoll).context("serialize protocol")?),
    }
    Ok(())
}

pub fn run_set(state_dir: &Path, args: &SetArgs) -> Result<()> {
    let mut protokoll = read_protokoll(&args.file)?;
    let mut counter = sequence_counter(state_dir);

    // Identity fields regenerate the identifier once per committed change,
    // even a re-selection of the current value. Gaps are expected.
    if let Some(bundesland) = &args.bundesland {
        protokoll.state = bundesland.clone();
        protokoll.refresh_id(&mut counter)?;
        debug!(id = %protokoll.id, "identifier refreshed after Bundesland change");
    }
    if let Some(jahr) = &args.jahr {
        protokoll.exam_year = jahr.clone();
        protokoll.refresh_id(&mut counter)?;
        debug!(id = %protokoll.id, "identifier refreshed after year change");
    }
    if let Some(monat) = &args.monat {
        protokoll.exam_month = monat.clone();
        protokoll.refresh_id(&mut counter)?;
        debug!(id = %protokoll.id, "identifier refreshed after month change");
    }

    if let Some(fach) = &args.fach {
        protokoll.fach = fach.clone();
    }
    if let Some(fachgebiet) = &args.fachgebiet {
        protokoll.fachgebiet = fachgebiet.clone();
    }
    if let Some(thema) = &args.thema {
        protokoll.thema = thema.clone();
    }
    if let Some(kategorie) = &args.kategorie {
        protokoll.kategorie = kategorie.clone();
    }
    if let Some(schlagwoerter) = &args.schlagwoerter {
        protokoll.schlagwoerter = schlagwoerter.clone();
    }
    if let Some(schwierigkeit) = &args.schwierigkeit {
        protokoll.schwierigkeit = schwierigkeit.clone();
    }
    if let Some(pruefungskompetenz) = &args.pruefungskompetenz {
        protokoll.pruefungskompetenz = pruefungskompetenz.clone();
    }
    if let Some(verbunden_themen) = &args.verbunden_themen {
        protokoll.verbunden_themen = verbunden_themen.clone();
    }
    if let Some(kommentar) = &args.kommentar {
        protokoll.kommentar = kommentar.clone();
    }

    write_protokoll(&args.file, &protokoll)?;
    info!(path = %args.file.display(), id = %protokoll.id, "protocol updated");
    Ok(())
}

pub fn run_taxonomy(args: &TaxonomyArgs) -> Result<()> {
    let taxonomie = load_taxonomie()?;
    let mut table = Table::new();

    if let Some(fachgebiet) = &args.fachgebiet {
        // A member with no Themen gets an empty table, not an error.
        if !taxonomie.contains_fachgebiet(fachgebiet) {
            bail!("unknown Fachgebiet: {fachgebiet}");
        }
        table.set_header(vec!["Thema"]);
        apply_table_style(&mut table);
        for thema in taxonomie.themen(fachgebiet) {
            table.add_row(vec![thema.clone()]);
        }
    } else if let Some(fach) = &args.fach {
        let fachgebiete = taxonomie.fachgebiete(fach);
        if !taxonomie.is_fach(fach) {
            bail!("unknown Fach: {fach}");
        }
        table.set_header(vec!["Fachgebiet", "Themen"]);
        apply_table_style(&mut table);
        for fachgebiet in fachgebiete {
            table.add_row(vec![
                fachgebiet.clone(),
                taxonomie.themen(fachgebiet).len().to_string(),
            ]);
        }
    } else {
        table.set_header(vec!["Fach", "Kürzel", "Fachgebiete"]);
        apply_table_style(&mut table);
        for fach in taxonomie.faecher() {
            table.add_row(vec![
                fach.clone(),
                fach_kuerzel_or_fallback(fach),
                taxonomie.fachgebiete(fach).len().to_string(),
            ]);
        }
    }

    println!("{table}");
    Ok(())
}

/// Returns true when the protocol is valid.
pub fn run_validate(args: &ValidateArgs) -> Result<bool> {
    let protokoll = read_protokoll(&args.file)?;
    let taxonomie = load_taxonomie()?;
    let violations = if args.export {
        validate_export(&protokoll, &taxonomie)
    } else {
        validate(&protokoll, &taxonomie)
    };

    if violations.is_empty() {
        println!("OK: {}", args.file.display());
        return Ok(true);
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Meldung"]);
    apply_table_style(&mut table);
    for (index, violation) in violations.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), violation.message()]);
    }
    println!("{table}");
    Ok(false)
}

pub fn run_draft_save(state_dir: &Path, args: &DraftSaveArgs) -> Result<()> {
    let protokoll = read_protokoll(&args.file)?;
    let slot = draft_slot(state_dir);
    slot.save(&protokoll)
        .with_context(|| format!("save draft to {}", slot.path().display()))?;
    println!("Entwurf gespeichert: {}", slot.path().display());
    Ok(())
}

pub fn run_draft_load(state_dir: &Path, args: &DraftLoadArgs) -> Result<()> {
    let slot = draft_slot(state_dir);
    let protokoll = slot
        .load()
        .map_err(|error| anyhow::anyhow!(error.user_message()))?;
    let Some(protokoll) = protokoll else {
        bail!("no draft stored in {}", slot.path().display());
    };
    match &args.out {
        Some(path) => {
            write_protokoll(path, &protokoll)?;
            info!(path = %path.display(), "draft restored");
        }
        None => println!("{}", to_canonical_json(&protokoll).context("serialize protocol")?),
    }
    Ok(())
}

pub fn run_export(state_dir: &Path, args: &ExportArgs) -> Result<()> {
    let mut protokoll = read_protokoll(&args.file)?;
    let taxonomie = load_taxonomie()?;

    let violations = validate_export(&protokoll, &taxonomie);
    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("- {}", violation.message());
        }
        bail!("protocol is not ready for export ({} violations)", violations.len());
    }

    // A document that never saw an identity change still needs an id.
    if protokoll.id.is_empty() {
        let mut counter = sequence_counter(state_dir);
        protokoll.refresh_id(&mut counter)?;
        write_protokoll(&args.file, &protokoll)?;
    }
    let Some(sequence) = protokoll.sequence_from_id() else {
        bail!("protocol {} has no usable identifier", args.file.display());
    };

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create export directory {}", args.out_dir.display()))?;
    let stem = export_filename(&protokoll, sequence);

    let json_path = export_path(&args.out_dir, &stem, "json");
    fs::write(&json_path, to_canonical_json(&protokoll).context("serialize protocol")?)
        .with_context(|| format!("write export file {}", json_path.display()))?;
    println!("{}", json_path.display());

    if args.markdown {
        let markdown_path = export_path(&args.out_dir, &stem, "md");
        fs::write(&markdown_path, to_markdown(&protokoll))
            .with_context(|| format!("write export file {}", markdown_path.display()))?;
        println!("{}", markdown_path.display());
    }

    info!(id = %protokoll.id, stem = %stem, "protocol exported");
    Ok(())
}

fn export_path(out_dir: &Path, stem: &str, extension: &str) -> PathBuf {
    out_dir.join(format!("{stem}.{extension}"))
}
