use std::{fmt, io};

use ratatui::{layout::Rect, text::Line, widgets::Block, Frame};

use crate::service::{
    catalog::CatalogService,
    data_manager::{DataManager, DataRetrievalError},
    lookup::{ChampionLookup, IdNotFoundError},
};

pub mod repl;
pub mod views;

/// Bundle of services handed to view factories.
pub struct Controller<'a> {
    pub manager: &'a DataManager,
    pub lookup: &'a ChampionLookup<'a>,
    pub catalog: &'a CatalogService<'a>,
}

pub struct RenderContext<'a, 'b> {
    pub frame: &'a mut Frame<'b>,
    pub area: Rect,
    pub scroll_offset: u16,
    pub block: Block<'a>,
}

pub type ViewResult = Result<(), ViewError>;
pub type TextCreationResult = Result<Vec<Line<'static>>, ViewError>;

#[derive(Debug)]
pub enum ViewError {
    ManagerFailed(DataRetrievalError),
    LookupFailed(IdNotFoundError),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViewError::ManagerFailed(err) => write!(f, "{}", err),
            ViewError::LookupFailed(err) => write!(f, "{}", err),
        }
    }
}

impl From<DataRetrievalError> for ViewError {
    fn from(error: DataRetrievalError) -> Self {
        ViewError::ManagerFailed(error)
    }
}

impl From<IdNotFoundError> for ViewError {
    fn from(error: IdNotFoundError) -> Self {
        ViewError::LookupFailed(error)
    }
}

#[derive(Debug)]
pub enum ReplError {
    TerminalFailed(io::Error),
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReplError::TerminalFailed(err) => write!(f, "Terminal failed: {}", err),
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(error: io::Error) -> Self {
        ReplError::TerminalFailed(error)
    }
}
