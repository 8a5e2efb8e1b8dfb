//! MOSI: archaeological site/evidence module.

use super::{EMPTY_MARK, place_line};
use crate::config::{DatasetConfig, Header, HeaderContext, ListItem, RecordSummary};
use crate::registry::{FieldDefinition as F, FieldRegistry};
use crate::target::Target;
use schedario_types::{DatasetKey, PropertyMap};

const FIELDS: &[F] = &[
    F::new("gid", "Codice univoco GNA", "Codici"),
    F::new("VRRP", "Codice progetto di riferimento", "Codici"),
    F::new("ACCC", "Codice identificativo", "Codici"),
    F::new("ACCS", "Note al codice", "Codici"),
    F::new("AMA", "Ambito di applicazione", "Codici"),
    F::new("AMB", "Ambito (MOSI)", "Codici"),
    F::new("OGD", "Definizione", "Definizione"),
    F::new("OGT", "Tipologia", "Definizione"),
    F::new("OGN", "Denominazione", "Definizione"),
    F::new("OGB", "Situazione attuale", "Definizione"),
    F::new("OGZ", "Specifiche allo stato attuale", "Definizione"),
    F::new("DBO", "Banca dati di origine", "Banca dati di provenienza"),
    F::new(
        "DBO_ID",
        "Codice banca dati di origine",
        "Banca dati di provenienza",
    ),
    F::new("CCO", "Banca dati di riferimento", "Altre banche dati"),
    F::new(
        "CCE",
        "Codice banca dati di riferimento",
        "Altre banche dati",
    ),
    F::new("CBC", "Codice bene culturale – NCTN", "Altre banche dati"),
    F::new("LCR", "Regione", "Localizzazione"),
    F::new("LCP", "Provincia", "Localizzazione"),
    F::new("LCC", "Comune", "Localizzazione"),
    F::new("LCS", "Stato", "Localizzazione"),
    F::new("LCI", "Indirizzo", "Localizzazione"),
    F::new("LCV", "Altri percorsi / specifiche", "Localizzazione"),
    F::new("PVL", "Toponimo / località", "Localizzazione"),
    F::new("PVZ", "Tipo di contesto", "Localizzazione"),
    F::new("GEL", "Tipo di localizzazione", "Georeferenziazione"),
    F::new("GPT", "Tecnica di georeferenziazione", "Georeferenziazione"),
    F::new(
        "GPM",
        "Grado di precisione del posizionamento",
        "Georeferenziazione",
    ),
    F::new(
        "GPBB",
        "Base cartografica di riferimento",
        "Georeferenziazione",
    ),
    F::new("GEN", "Note al posizionamento", "Georeferenziazione"),
    F::new("ACBA", "Accessibilità", "Accessibilità"),
    F::new("ACBS", "Note all'accessibilità", "Accessibilità"),
    F::new("MTAM", "Quota minima (m s.l.m.)", "Quote"),
    F::new("MTAX", "Quota massima (m s.l.m.)", "Quote"),
    F::new("MTAR", "Quota relativa", "Quote"),
    F::new("MTAS", "Note alle quote", "Quote"),
    F::new("DES", "Descrizione", "Descrizione"),
    F::new("OGM", "Modalità di individuazione", "Descrizione"),
    F::new("MATP", "Presenza di materiali", "Materiali"),
    F::new("MATN", "Note ai materiali", "Materiali"),
    F::new("DTR", "Cronologia generica", "Cronologia"),
    F::new("DTSI", "Data inizio", "Cronologia"),
    F::new("DTSV", "Validità data inizio", "Cronologia"),
    F::new("DTSF", "Data fine", "Cronologia"),
    F::new("DTSL", "Validità data fine", "Cronologia"),
    F::new("DTT", "Note alla cronologia", "Cronologia"),
    F::new(
        "CDGG",
        "Condizione giuridica",
        "Condizione giuridica e provvedimenti",
    ),
    F::new(
        "BPT",
        "Provvedimenti amministrativi / sintesi",
        "Condizione giuridica e provvedimenti",
    ),
    F::new("STUE", "Ente / amministrazione", "Strumenti urbanistici"),
    F::new("STUT", "Tipo di strumento", "Strumenti urbanistici"),
    F::new(
        "STUS",
        "Note agli strumenti urbanistici",
        "Strumenti urbanistici",
    ),
    F::new("NVCT", "Normativa di riferimento", "Vincoli"),
    F::new("NVCM", "Provvedimento di tutela", "Vincoli"),
    F::new("NVCE", "Estremi del provvedimento", "Vincoli"),
    F::new("NVCP", "Estensione del vincolo", "Vincoli"),
    F::new("NVCN", "Note ai vincoli", "Vincoli"),
    F::new("FOIT", "Tipo di immagine", "Fotointerpretazione"),
    F::new("FOIR", "Riferimento cronologico", "Fotointerpretazione"),
    F::new("FOIA", "Origine anomalia", "Fotointerpretazione"),
    F::new("FOIQ", "Tipo di anomalia", "Fotointerpretazione"),
    F::new("FOIO", "Affidabilità", "Fotointerpretazione"),
    F::new("FOIF", "Classificazione anomalia", "Fotointerpretazione"),
    F::new(
        "FOIN",
        "Note alla fotointerpretazione",
        "Fotointerpretazione",
    ),
    F::new("BIBR", "Abbreviazione", "Bibliografia e archivio"),
    F::new(
        "BIBM",
        "Riferimenti bibliografici",
        "Bibliografia e archivio",
    ),
    F::new("DOZ", "Archivio di riferimento", "Bibliografia e archivio"),
    F::new("FUR", "Funzionario responsabile", "Certificazione e dati"),
    F::new("CMA", "Anno di redazione", "Certificazione e dati"),
    F::new(
        "CMC",
        "Responsabile della redazione",
        "Certificazione e dati",
    ),
    F::new("CMR", "Responsabile dei contenuti", "Certificazione e dati"),
    F::new("CML", "Autore ultima modifica", "Certificazione e dati"),
    F::new("ADP", "Profilo di accesso ai dati", "Certificazione e dati"),
    F::new("GNA", "Riutilizzo MOSI da GNA", "Certificazione e dati"),
    F::new("SSK", "Stato scheda", "Certificazione e dati"),
    F::new("DCMA", "Autore immagine", "Immagine"),
    F::new("DCME", "Ente proprietario", "Immagine"),
    F::new("DCMR", "Data dell'immagine", "Immagine"),
    F::new("DCMM", "Titolo / didascalia", "Immagine"),
    F::new("DCML", "Licenza d'uso", "Immagine"),
    F::new("DCMW", "Indirizzo web (URL)", "Immagine"),
    F::new("DCMT", "Note", "Immagine"),
    F::new("DCMK", "Immagine", "Immagine"),
    F::new(
        "VRPI",
        "Interpretazione del sito / contenuto fossilifero",
        "Potenziale archeologico",
    ),
    F::new("VRPA", "Affidabilità", "Potenziale archeologico"),
    F::new(
        "VRPV",
        "Valutazione nel contesto",
        "Potenziale archeologico",
    ),
    F::new("VRPS", "Potenziale / sintesi", "Potenziale archeologico"),
    F::new(
        "VRPN",
        "Note al potenziale archeologico",
        "Potenziale archeologico",
    ),
    F::new(
        "VRRO",
        "Distanza dall'opera in progetto (m)",
        "Rischio relativo",
    ),
    F::new(
        "VRRR",
        "Valutazione rispetto all'opera in progetto",
        "Rischio relativo",
    ),
    F::new("VRRS", "Rischio / sintesi", "Rischio relativo"),
    F::new("VRRN", "Note al rischio", "Rischio relativo"),
];

const SECTION_ORDER: &[&str] = &[
    "Codici",
    "Definizione",
    "Localizzazione",
    "Georeferenziazione",
    "Accessibilità",
    "Quote",
    "Descrizione",
    "Materiali",
    "Cronologia",
    "Condizione giuridica e provvedimenti",
    "Strumenti urbanistici",
    "Vincoli",
    "Fotointerpretazione",
    "Bibliografia e archivio",
    "Certificazione e dati",
    "Immagine",
    "Potenziale archeologico",
    "Rischio relativo",
    "Banca dati di provenienza",
    "Altre banche dati",
];

struct MosiSummary;

impl RecordSummary for MosiSummary {
    fn header(&self, props: &PropertyMap, ctx: HeaderContext) -> Header {
        let subtitle = format!(
            "{} · Codice GNA: {}",
            place_line(props, "LCC", "LCP", "LCR"),
            props.text_or("gid", EMPTY_MARK)
        );
        let mut header = Header::new(props.text_or("OGN", EMPTY_MARK)).with_subtitle(subtitle);

        if ctx.target == Target::Interactive {
            if props.is_populated("OGD") {
                header = header.with_badge(props.text("OGD"));
            }
            if props.is_populated("DTR") {
                header = header.with_badge(format!("Cronologia: {}", props.text("DTR")));
            }
            if props.is_populated("PVZ") {
                header = header.with_badge(format!("Contesto: {}", props.text("PVZ")));
            }
        }
        header
    }

    fn list_item(&self, props: &PropertyMap, _ctx: HeaderContext) -> ListItem {
        let mut meta = match props.text("LCC") {
            comune if comune.is_empty() => format!("Comune: {}", EMPTY_MARK),
            comune => comune,
        };
        if props.is_populated("LCP") {
            meta.push_str(&format!(" (Prov. {})", props.text("LCP")));
        }
        if props.is_populated("DTR") {
            meta.push_str(&format!(" · {}", props.text("DTR")));
        }
        ListItem {
            title: props.text_or("OGN", EMPTY_MARK),
            meta,
        }
    }
}

pub static CONFIG: DatasetConfig = DatasetConfig {
    key: DatasetKey::Mosi,
    label: "MOSI",
    registry: FieldRegistry::new(FIELDS),
    section_order: SECTION_ORDER,
    full_width_sections: &[
        "Descrizione",
        "Bibliografia e archivio",
        "Fotointerpretazione",
    ],
    search_fields: &["OGN", "LCC", "OGD", "DES"],
    summary: Some(&MosiSummary),
    children: None,
    identifier_key: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PropertyMap {
        [
            ("OGN", "Villa dei Quintili"),
            ("LCC", "Roma"),
            ("LCP", "RM"),
            ("LCR", "Lazio"),
            ("OGD", "villa"),
            ("DTR", "età imperiale"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_interactive_header() {
        let header = CONFIG.header(&sample(), HeaderContext::new(Target::Interactive));
        assert_eq!(header.title, "Villa dei Quintili");
        assert_eq!(
            header.subtitle.as_deref(),
            Some("Comune: Roma (Prov. RM) – Regione: Lazio · Codice GNA: vuoto")
        );
        assert_eq!(header.badges, vec!["villa", "Cronologia: età imperiale"]);
    }

    #[test]
    fn test_print_header_has_no_badges() {
        let header = CONFIG.header(&sample(), HeaderContext::new(Target::Print));
        assert!(header.badges.is_empty());
    }

    #[test]
    fn test_list_item() {
        let item = CONFIG.list_item(&sample(), HeaderContext::new(Target::Interactive));
        assert_eq!(item.title, "Villa dei Quintili");
        assert_eq!(item.meta, "Roma (Prov. RM) · età imperiale");

        let bare = CONFIG.list_item(&PropertyMap::new(), HeaderContext::new(Target::Interactive));
        assert_eq!(bare.title, "vuoto");
        assert_eq!(bare.meta, "Comune: vuoto");
    }

    #[test]
    fn test_declares_twenty_sections() {
        assert_eq!(SECTION_ORDER.len(), 20);
        assert_eq!(CONFIG.registry.sections().len(), 20);
        assert!(CONFIG.registry.iter().all(|f| f.truncation.is_none()));
    }
}
