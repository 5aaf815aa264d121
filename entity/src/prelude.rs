pub use super::{
    audit_log::Entity as AuditLog, declaration::Entity as Declaration,
    declaration_item::Entity as DeclarationItem, exporter::Entity as Exporter,
    importer::Entity as Importer, siglad_user::Entity as SigladUser,
};
