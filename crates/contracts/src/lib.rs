//! Общие типы backend и клиентов: агрегаты, формат импорта, DTO отчётов.

pub mod dashboards;
pub mod domain;
pub mod usecases;
