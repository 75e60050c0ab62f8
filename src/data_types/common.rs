pub type DocumentId = String;

pub trait Identifiable {
    fn document_id(&self) -> &DocumentId;
}
