//! Flattening of a parsed record into the output row shape.

use serde::Serialize;

use crate::parser::ParsedRecord;

/// Column names, in output order.
pub const HEADER: [&str; 15] = [
    "Congress Member Name",
    "id",
    "Date",
    "Materia",
    "Artículo",
    "Vote",
    "Trámite",
    "Quorum",
    "Proyecto Ley",
    "Pareo",
    "Tipo de Votación",
    "Resultado",
    "A favor",
    "En contra",
    "Abstención",
];

/// One CSV line: a member's vote joined with the record-level fields.
/// Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoteRow {
    pub member_name: String,
    pub id: String,
    pub date: String,
    pub materia: String,
    pub articulo: String,
    pub vote: String,
    pub tramite: String,
    pub quorum: String,
    pub proyecto_ley: String,
    pub pareo: String,
    pub tipo_de_votacion: String,
    pub resultado: String,
    pub a_favor: String,
    pub en_contra: String,
    pub abstencion: String,
}

/// One row per member, categories in page order. A paired member gets an
/// empty vote column; the pairing label carries the information instead.
/// Record fields the page did not provide come through as empty strings.
pub fn flatten(id: &str, record: &ParsedRecord) -> Vec<VoteRow> {
    let attr = |key: &str| record.attributes.get(key).cloned().unwrap_or_default();
    let tally = |key: &str| record.tally.get(key).cloned().unwrap_or_default();

    let date = attr("Fecha");
    let materia = attr("Materia");
    let articulo = attr("Artículo");
    let tramite = attr("Trámite");
    let quorum = attr("Quorum");
    let proyecto_ley = attr("Proyecto Ley");
    let tipo_de_votacion = attr("Tipo de Votación");
    let resultado = attr("Resultado");
    let a_favor = tally("A Favor");
    let en_contra = tally("En Contra");
    let abstencion = tally("Abstención");

    let mut rows = Vec::new();
    for (category, members) in &record.members {
        for member in members {
            let vote = if member.pairing.is_empty() {
                category.to_string()
            } else {
                String::new()
            };
            rows.push(VoteRow {
                member_name: member.name.clone(),
                id: id.to_string(),
                date: date.clone(),
                materia: materia.clone(),
                articulo: articulo.clone(),
                vote,
                tramite: tramite.clone(),
                quorum: quorum.clone(),
                proyecto_ley: proyecto_ley.clone(),
                pareo: member.pairing.clone(),
                tipo_de_votacion: tipo_de_votacion.clone(),
                resultado: resultado.clone(),
                a_favor: a_favor.clone(),
                en_contra: en_contra.clone(),
                abstencion: abstencion.clone(),
            });
        }
    }
    rows
}

// ── Tests ──
