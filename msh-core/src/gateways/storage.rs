/// Storage of uploaded files that are attached to facility requests.
pub trait AttachmentStorage {
    fn delete_attachment(&self, url: &str) -> anyhow::Result<()>;
}
