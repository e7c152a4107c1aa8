use chrono::NaiveDate;

use super::error::FormatError;
use super::headers::HeaderMap;
use super::workbook::{Cell, Worksheet};

static EMPTY_CELL: Cell = Cell::Empty;

/// Строка данных листа с доступом к ячейкам по имени колонки
pub struct SheetRow<'a> {
    sheet: &'a str,
    number: usize,
    cells: &'a [Cell],
    headers: &'a HeaderMap,
}

/// Строки данных листа (со второй), пустые строки пропускаются
pub fn rows<'a>(sheet: &'a Worksheet, headers: &'a HeaderMap) -> impl Iterator<Item = SheetRow<'a>> + 'a {
    let name = sheet.name();
    sheet.data_rows().map(move |(number, cells)| SheetRow {
        sheet: name,
        number,
        cells,
        headers,
    })
}

impl<'a> SheetRow<'a> {
    /// Номер строки в файле, начиная с 1
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn sheet(&self) -> &'a str {
        self.sheet
    }

    fn cell(&self, column: &str) -> &'a Cell {
        self.headers
            .position(column)
            .and_then(|position| self.cells.get(position))
            .unwrap_or(&EMPTY_CELL)
    }

    pub fn integer(&self, column: &str) -> Result<i32, FormatError> {
        let cell = self.cell(column);
        if cell.is_empty() {
            return Err(self.invalid(column, cell, "value is missing"));
        }
        let value = cell
            .as_integer()
            .ok_or_else(|| self.invalid(column, cell, "expected an integer"))?;
        i32::try_from(value).map_err(|_| self.invalid(column, cell, "integer is out of range"))
    }

    pub fn positive_integer(&self, column: &str) -> Result<i32, FormatError> {
        let value = self.integer(column)?;
        if value <= 0 {
            return Err(self.invalid(column, self.cell(column), "expected a positive integer"));
        }
        Ok(value)
    }

    pub fn text(&self, column: &str) -> Result<String, FormatError> {
        let cell = self.cell(column);
        cell.as_text()
            .ok_or_else(|| self.invalid(column, cell, "value is missing"))
    }

    pub fn date(&self, column: &str) -> Result<NaiveDate, FormatError> {
        let cell = self.cell(column);
        if cell.is_empty() {
            return Err(self.invalid(column, cell, "value is missing"));
        }
        cell.as_date()
            .ok_or_else(|| self.invalid(column, cell, "expected a calendar date"))
    }

    fn invalid(&self, column: &str, cell: &Cell, reason: &str) -> FormatError {
        FormatError::InvalidCell {
            sheet: self.sheet.to_string(),
            row: self.number,
            column: column.to_string(),
            value: cell.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales_sheet(data: Vec<Cell>) -> Worksheet {
        Worksheet::new(
            "sales",
            vec![
                vec![
                    Cell::from("SALE_ID"),
                    Cell::from("product_id"),
                    Cell::from("quantity"),
                    Cell::from("sale_date"),
                ],
                data,
            ],
        )
    }

    #[test]
    fn test_reads_typed_values_by_column_name() {
        let sheet = sales_sheet(vec![
            Cell::Float(1.0),
            Cell::from("10"),
            Cell::Int(2),
            Cell::from("2024-01-01"),
        ]);
        let headers = HeaderMap::resolve(&sheet);
        let row = rows(&sheet, &headers).next().unwrap();

        assert_eq!(row.number(), 2);
        assert_eq!(row.integer("sale_id").unwrap(), 1);
        assert_eq!(row.integer("product_id").unwrap(), 10);
        assert_eq!(row.positive_integer("quantity").unwrap(), 2);
        assert_eq!(
            row.date("sale_date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_invalid_values_point_at_the_cell() {
        let sheet = sales_sheet(vec![
            Cell::from("abc"),
            Cell::Int(10),
            Cell::Int(0),
            Cell::from("not a date"),
        ]);
        let headers = HeaderMap::resolve(&sheet);
        let row = rows(&sheet, &headers).next().unwrap();

        match row.integer("sale_id") {
            Err(FormatError::InvalidCell {
                sheet,
                row,
                column,
                value,
                ..
            }) => {
                assert_eq!(sheet, "sales");
                assert_eq!(row, 2);
                assert_eq!(column, "sale_id");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(row.positive_integer("quantity").is_err());
        assert!(row.date("sale_date").is_err());
    }

    #[test]
    fn test_short_row_reads_as_missing() {
        let sheet = sales_sheet(vec![Cell::Int(1)]);
        let headers = HeaderMap::resolve(&sheet);
        let row = rows(&sheet, &headers).next().unwrap();
        assert!(matches!(
            row.integer("quantity"),
            Err(FormatError::InvalidCell { reason, .. }) if reason == "value is missing"
        ));
    }
}
