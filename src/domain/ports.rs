use crate::domain::model::{Parameters, Topology};
use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ParameterProvider {
    fn hardware_type(&self) -> &str;
    fn image(&self) -> &str;
    fn username(&self) -> &str;
    fn num_rcnodes(&self) -> usize;

    fn parameters(&self) -> Parameters {
        Parameters {
            hardware_type: self.hardware_type().to_string(),
            image: self.image().to_string(),
            username: self.username().to_string(),
            num_rcnodes: self.num_rcnodes(),
        }
    }
}

pub trait Renderer {
    fn render(&self, topology: &Topology) -> Result<String>;
}
