use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use std::fmt;
use std::path::Path;

use super::error::ImportError;

/// Текстовые форматы даты, которые принимаются в колонках дат
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Максимальный серийный номер даты Excel (9999-12-31)
const MAX_EXCEL_SERIAL: i64 = 2_958_465;

/// Значение ячейки, уже отвязанное от библиотеки чтения
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Date(NaiveDate),
    Error(String),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Текстовое значение без пробелов по краям; пустые ячейки и ошибки - `None`
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty | Cell::Error(_) => None,
            Cell::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            other => Some(other.to_string()),
        }
    }

    /// Целое значение: Int, Float без дробной части или текст с целым числом
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            Cell::Float(f) => float_to_integer(*f),
            Cell::Text(s) => {
                let trimmed = s.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().and_then(float_to_integer))
            }
            _ => None,
        }
    }

    /// Календарная дата без времени
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(d) => Some(*d),
            Cell::Text(s) => parse_date_text(s.trim()),
            Cell::Int(serial) => excel_serial_to_date(*serial),
            Cell::Float(f) if f.is_finite() => excel_serial_to_date(f.trunc() as i64),
            _ => None,
        }
    }
}

fn float_to_integer(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|datetime| datetime.date_naive())
}

/// Серийный номер Excel: дни от 1899-12-30
fn excel_serial_to_date(serial: i64) -> Option<NaiveDate> {
    if !(1..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(serial as u64))
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(v) => match float_to_integer(*v) {
                Some(i) => write!(f, "{}", i),
                None => write!(f, "{}", v),
            },
            Cell::Text(s) => f.write_str(s),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Cell::Error(e) => f.write_str(e),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::String(s) => Cell::Text(s.clone()),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(_) | Data::DateTimeIso(_) => data
                .as_date()
                .map(Cell::Date)
                .unwrap_or_else(|| Cell::Text(data.to_string())),
            Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Error(e.to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<NaiveDate> for Cell {
    fn from(d: NaiveDate) -> Self {
        Cell::Date(d)
    }
}

/// Лист книги: прямоугольная сетка ячеек, строка 0 соответствует строке 1 файла
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    name: String,
    rows: Vec<Vec<Cell>>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Строит сетку от ячейки A1, даже если данные в файле начинаются не с неё
    fn from_range(name: String, range: &Range<Data>) -> Self {
        let Some((end_row, end_col)) = range.end() else {
            return Self::new(name, Vec::new());
        };
        let rows = (0..=end_row)
            .map(|r| {
                (0..=end_col)
                    .map(|c| range.get_value((r, c)).map(Cell::from).unwrap_or(Cell::Empty))
                    .collect()
            })
            .collect();
        Self::new(name, rows)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header_row(&self) -> &[Cell] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Строки данных (со второй), полностью пустые пропускаются.
    /// Номер строки - как в файле, начиная с 1.
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[Cell])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, cells)| !cells.iter().all(Cell::is_empty))
            .map(|(idx, cells)| (idx + 1, cells.as_slice()))
    }
}

/// Прочитанная книга
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Worksheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Worksheet>) -> Self {
        Self { sheets }
    }

    /// Открывает файл; формат определяется по расширению (xlsx, xlsm, xlsb, xls, ods)
    pub fn open(path: &Path) -> Result<Self, ImportError> {
        let mut workbook =
            open_workbook_auto(path).map_err(|e| ImportError::Workbook(e.to_string()))?;

        let mut sheets = Vec::new();
        for name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| ImportError::Workbook(format!("sheet '{}': {}", name, e)))?;
            sheets.push(Worksheet::from_range(name, &range));
        }

        tracing::debug!("Opened workbook {} with {} sheets", path.display(), sheets.len());
        Ok(Self::new(sheets))
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Worksheet::name).collect()
    }

    /// Поиск листа по имени без учета регистра
    pub fn sheet(&self, name: &str) -> Option<&Worksheet> {
        let wanted = name.to_lowercase();
        self.sheets
            .iter()
            .find(|sheet| sheet.name().to_lowercase() == wanted)
    }
}
