//! Построители книг для тестов импорта.

use super::workbook::{Cell, Workbook, Worksheet};

pub fn header(names: &[&str]) -> Vec<Cell> {
    names.iter().map(|name| Cell::from(*name)).collect()
}

pub fn categories_sheet(rows: &[(i64, &str)]) -> Worksheet {
    let mut cells = vec![header(&["category_id", "category_name"])];
    cells.extend(
        rows.iter()
            .map(|(id, name)| vec![Cell::Int(*id), Cell::from(*name)]),
    );
    Worksheet::new("categories", cells)
}

pub fn products_sheet(rows: &[(i64, &str, i64, i64)]) -> Worksheet {
    let mut cells = vec![header(&["product_id", "product_name", "category_id", "price"])];
    cells.extend(rows.iter().map(|(id, name, category_id, price)| {
        vec![
            Cell::Int(*id),
            Cell::from(*name),
            Cell::Int(*category_id),
            Cell::Int(*price),
        ]
    }));
    Worksheet::new("products", cells)
}

pub fn sales_sheet(rows: &[(i64, i64, i64, &str)]) -> Worksheet {
    let mut cells = vec![header(&["sale_id", "product_id", "quantity", "sale_date"])];
    cells.extend(rows.iter().map(|(sale_id, product_id, quantity, date)| {
        vec![
            Cell::Int(*sale_id),
            Cell::Int(*product_id),
            Cell::Int(*quantity),
            Cell::from(*date),
        ]
    }));
    Worksheet::new("sales", cells)
}

fn valid_sheets() -> Vec<Worksheet> {
    vec![
        categories_sheet(&[(1, "Café"), (2, "Bakery")]),
        products_sheet(&[
            (10, "Espresso", 1, 250),
            (11, "Latte", 1, 320),
            (12, "Croissant", 2, 180),
        ]),
        sales_sheet(&[
            (1, 10, 2, "2024-01-01"),
            (1, 11, 1, "2024-01-01"),
            (2, 10, 5, "2024-01-02"),
        ]),
    ]
}

/// Книга из трёх листов: 2 категории, 3 товара, 2 продажи (2 + 1 строка)
pub fn valid_workbook() -> Workbook {
    Workbook::new(valid_sheets())
}

pub fn workbook_without(sheet: &str) -> Workbook {
    Workbook::new(
        valid_sheets()
            .into_iter()
            .filter(|s| s.name() != sheet)
            .collect(),
    )
}

/// Настоящий xlsx-файл: листы и заголовки в другом регистре, `sale_date`
/// записан ячейками-датами. Если `unknown_category`, товар Tea ссылается
/// на несуществующую категорию 9.
fn build_xlsx(with_sales: bool, unknown_category: bool) -> Vec<u8> {
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook as XlsxWorkbook};

    let mut book = XlsxWorkbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let categories = book.add_worksheet();
    categories.set_name("Categories").unwrap();
    categories.write_string(0, 0, "Category_ID").unwrap();
    categories.write_string(0, 1, "Category_Name").unwrap();
    for (row, (id, name)) in [(1.0, "Café"), (2.0, "Bakery")].into_iter().enumerate() {
        let row = row as u32 + 1;
        categories.write_number(row, 0, id).unwrap();
        categories.write_string(row, 1, name).unwrap();
    }

    let tea_category = if unknown_category { 9.0 } else { 1.0 };
    let products = book.add_worksheet();
    products.set_name("Products").unwrap();
    for (col, name) in ["product_id", "product_name", "category_id", "price"]
        .into_iter()
        .enumerate()
    {
        products.write_string(0, col as u16, name).unwrap();
    }
    for (row, (id, name, category_id, price)) in [
        (10.0, "Tea", tea_category, 150.0),
        (11.0, "Bun", 2.0, 90.0),
    ]
    .into_iter()
    .enumerate()
    {
        let row = row as u32 + 1;
        products.write_number(row, 0, id).unwrap();
        products.write_string(row, 1, name).unwrap();
        products.write_number(row, 2, category_id).unwrap();
        products.write_number(row, 3, price).unwrap();
    }

    if with_sales {
        let sales = book.add_worksheet();
        sales.set_name("Sales").unwrap();
        for (col, name) in ["sale_id", "product_id", "quantity", "sale_date"]
            .into_iter()
            .enumerate()
        {
            sales.write_string(0, col as u16, name).unwrap();
        }
        for (row, (sale_id, product_id, quantity, day)) in
            [(1.0, 10.0, 2.0, 1), (1.0, 11.0, 1.0, 1), (2.0, 10.0, 4.0, 2)]
                .into_iter()
                .enumerate()
        {
            let row = row as u32 + 1;
            let date = ExcelDateTime::from_ymd(2024, 1, day).unwrap();
            sales.write_number(row, 0, sale_id).unwrap();
            sales.write_number(row, 1, product_id).unwrap();
            sales.write_number(row, 2, quantity).unwrap();
            sales.write_datetime_with_format(row, 3, &date, &date_format).unwrap();
        }
    }

    book.save_to_buffer().unwrap()
}

/// xlsx с тремя листами: 2 категории, 2 товара, 2 продажи (2 + 1 строка)
pub fn valid_xlsx() -> Vec<u8> {
    build_xlsx(true, false)
}

pub fn xlsx_without_sales() -> Vec<u8> {
    build_xlsx(false, false)
}

pub fn xlsx_with_unknown_category() -> Vec<u8> {
    build_xlsx(true, true)
}
