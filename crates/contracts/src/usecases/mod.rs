pub mod u001_import_spreadsheet;
