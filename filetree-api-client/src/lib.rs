use filetree_api_schema::jquery_file_tree::{JqueryFileTreeRequest, PATH};

#[derive(Debug, Clone)]
pub struct FileTreeApiClient {
    pub base_url: String,
}

#[derive(Debug)]
pub enum FileTreeApiClientError {
    Ureq(Box<ureq::Error>),
    IO(Box<std::io::Error>),
}

impl FileTreeApiClient {
    pub fn new(base_url: String) -> Self {
        let mut base_url = base_url;
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Posts the request as a form, the way the widget does.
    pub fn jquery_file_tree(
        &self,
        request: &JqueryFileTreeRequest,
    ) -> Result<String, FileTreeApiClientError> {
        let url = format!("{}{}", self.base_url, PATH);
        let html = ureq::post(&url)
            .send_form(&request.form_pairs())
            .map_err(|e| FileTreeApiClientError::Ureq(Box::new(e)))?
            .into_string()
            .map_err(|e| FileTreeApiClientError::IO(Box::new(e)))?;
        Ok(html)
    }

    pub fn jquery_file_tree_get(
        &self,
        request: &JqueryFileTreeRequest,
    ) -> Result<String, FileTreeApiClientError> {
        let url = format!("{}{}", self.base_url, PATH);
        let mut req = ureq::get(&url);
        for (key, value) in request.form_pairs() {
            req = req.query(key, value);
        }
        let html = req
            .call()
            .map_err(|e| FileTreeApiClientError::Ureq(Box::new(e)))?
            .into_string()
            .map_err(|e| FileTreeApiClientError::IO(Box::new(e)))?;
        Ok(html)
    }
}
