//! CSV output. The file is created once with its header row, then rows
//! are appended per processed record.

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};

use crate::rows::{VoteRow, HEADER};

/// Create or truncate `path` and write the header row.
pub fn initialize(path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(HEADER)?;
    writer.flush()?;
    Ok(())
}

/// Append `rows` to an existing CSV file.
pub fn append(path: &Path, rows: &[VoteRow]) -> Result<()> {
    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn row(name: &str, materia: &str) -> VoteRow {
        VoteRow {
            member_name: name.to_string(),
            id: "31669".to_string(),
            date: "05 de enero de 2021".to_string(),
            materia: materia.to_string(),
            articulo: String::new(),
            vote: "A Favor".to_string(),
            tramite: String::new(),
            quorum: String::new(),
            proyecto_ley: String::new(),
            pareo: String::new(),
            tipo_de_votacion: String::new(),
            resultado: "Aprobado".to_string(),
            a_favor: "5".to_string(),
            en_contra: "2".to_string(),
            abstencion: "1".to_string(),
        }
    }

    #[test]
    fn initialize_writes_exactly_the_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.csv");
        initialize(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.trim_end(),
            "Congress Member Name,id,Date,Materia,Artículo,Vote,Trámite,Quorum,\
             Proyecto Ley,Pareo,Tipo de Votación,Resultado,A favor,En contra,Abstención"
        );
    }

    #[test]
    fn initialize_truncates_previous_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.csv");
        std::fs::write(&path, "restos de otra corrida\n").unwrap();
        initialize(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("restos"));
    }

    #[test]
    fn appended_rows_follow_the_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.csv");
        initialize(&path).unwrap();
        append(&path, &[row("Pérez L., Leonel", "Tránsito")]).unwrap();
        append(&path, &[row("Soto F., Raúl", "Tránsito")]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("\"Pérez L., Leonel\",31669,"));
        assert!(lines[2].starts_with("\"Soto F., Raúl\",31669,"));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.csv");
        initialize(&path).unwrap();
        append(&path, &[row("Flores G., Iván", "Modifica la ley N° 18.290, de Tránsito")]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Modifica la ley N° 18.290, de Tránsito\""));
    }
}
