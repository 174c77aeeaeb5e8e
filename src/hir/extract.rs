//! Declaration extraction: walk a parsed file and produce [`ClassData`].

use std::sync::Arc;

use smol_str::SmolStr;
use tracing::trace;

use super::data::{
    AnnotationData, AttributeValue, ClassData, FieldData, FileScope, ImportData, MethodData,
    Visibility,
};
use super::ids::{ClassId, NodePtr};
use crate::base::FileId;
use crate::parser::{
    AnnotationValue, AstNode, ClassDecl, ClassKind, Expr, Modifiers, SourceFile, SyntaxKind,
    TypeRef,
};

/// Extraction state for one file.
struct ExtractionContext {
    file: FileId,
    scope: Arc<FileScope>,
    /// Id the next extracted class will get
    next_id: u32,
    classes: Vec<ClassData>,
}

/// Extract every (nested) type declaration of `source`.
///
/// Classes are numbered densely from `first_id` in pre-order, so an outer
/// class always precedes its nested classes.
pub fn extract_classes(file: FileId, source: &SourceFile, first_id: u32) -> Vec<ClassData> {
    let mut ctx = ExtractionContext {
        file,
        scope: Arc::new(extract_scope(source)),
        next_id: first_id,
        classes: Vec::new(),
    };
    for class in source.classes() {
        extract_class(&mut ctx, &class, None);
    }
    trace!(file = file.index(), count = ctx.classes.len(), "extracted classes");
    ctx.classes
}

fn extract_scope(source: &SourceFile) -> FileScope {
    let package = source
        .package()
        .and_then(|p| p.name())
        .map(|name| SmolStr::new(name.to_dotted()));
    let imports = source
        .imports()
        .filter_map(|import| {
            let target = import.target()?;
            Some(ImportData {
                path: target.to_dotted().into(),
                is_static: import.is_static(),
                is_wildcard: import.is_wildcard(),
            })
        })
        .collect();
    FileScope { package, imports }
}

fn extract_class(ctx: &mut ExtractionContext, class: &ClassDecl, outer: Option<(ClassId, ClassKind)>) {
    let Some(name_node) = class.name() else {
        return;
    };
    let Some(name) = name_node.text().map(SmolStr::new) else {
        return;
    };

    let id = ClassId::new(ctx.next_id);
    ctx.next_id += 1;
    // position of this class in `ctx.classes`; ids are offset by a constant
    let slot = ctx.classes.len();

    let kind = class.kind();
    let modifiers = class.modifiers();
    let in_interface = outer.is_some_and(|(_, k)| is_interface_like(k));
    let qualified_name = match outer {
        Some((outer_id, _)) => {
            let outer_slot = outer_id.index() - (id.index() - slot);
            format!("{}.{}", ctx.classes[outer_slot].qualified_name, name)
        }
        None => ctx.scope.qualify(&name),
    };

    let supertypes = class
        .extends()
        .chain(class.implements())
        .map(|ty| SmolStr::new(ty.path()))
        .filter(|path| !path.is_empty())
        .collect();

    ctx.classes.push(ClassData {
        name: name.clone(),
        qualified_name: qualified_name.into(),
        kind,
        file: ctx.file,
        range: class.syntax().text_range(),
        name_range: name_node.syntax().text_range(),
        visibility: visibility(modifiers.as_ref(), in_interface),
        annotations: annotations(modifiers.as_ref(), &ctx.scope),
        supertypes,
        methods: Vec::new(),
        fields: Vec::new(),
        outer: outer.map(|(outer_id, _)| outer_id),
        scope: ctx.scope.clone(),
    });

    let members_public = is_interface_like(kind);
    let mut methods = Vec::new();
    let mut fields = Vec::new();

    for constant in class.enum_constants() {
        let Some(constant_name) = constant.text() else {
            continue;
        };
        fields.push(FieldData {
            name: constant_name.into(),
            name_range: constant.syntax().text_range(),
            visibility: Visibility::Public,
            is_static: true,
            is_final: true,
            ty: Some(name.clone()),
            initializer: None,
        });
    }

    for component in class.record_components() {
        let (Some(component_name), Some(ty)) = (component.name(), component.ty()) else {
            continue;
        };
        let Some(text) = component_name.text() else {
            continue;
        };
        let range = component_name.syntax().text_range();
        fields.push(FieldData {
            name: text.clone().into(),
            name_range: range,
            visibility: Visibility::Private,
            is_static: false,
            is_final: true,
            ty: Some(type_path(&ty, false).into()),
            initializer: None,
        });
        // implicit accessor
        methods.push(MethodData {
            name: text.into(),
            name_range: range,
            range: component.syntax().text_range(),
            visibility: Visibility::Public,
            is_static: false,
            is_constructor: false,
            annotations: Vec::new(),
            return_type: Some(type_path(&ty, false).into()),
        });
    }

    for method in class.methods() {
        let Some(method_name) = method.name() else {
            continue;
        };
        let Some(text) = method_name.text() else {
            continue;
        };
        let modifiers = method.modifiers();
        methods.push(MethodData {
            name: text.into(),
            name_range: method_name.syntax().text_range(),
            range: method.syntax().text_range(),
            visibility: visibility(modifiers.as_ref(), members_public),
            is_static: modifiers.as_ref().is_some_and(|m| m.is_static()),
            is_constructor: method.is_constructor(),
            annotations: annotations(modifiers.as_ref(), &ctx.scope),
            return_type: method.return_type().map(|ty| type_path(&ty, false).into()),
        });
    }

    for field in class.fields() {
        let modifiers = field.modifiers();
        let ty = field.ty();
        for declarator in field.declarators() {
            let Some(field_name) = declarator.name() else {
                continue;
            };
            let Some(text) = field_name.text() else {
                continue;
            };
            fields.push(FieldData {
                name: text.into(),
                name_range: field_name.syntax().text_range(),
                visibility: visibility(modifiers.as_ref(), members_public),
                is_static: members_public || modifiers.as_ref().is_some_and(|m| m.is_static()),
                is_final: members_public || modifiers.as_ref().is_some_and(|m| m.is_final()),
                ty: ty
                    .as_ref()
                    .map(|ty| type_path(ty, declarator.has_dims()).into()),
                initializer: declarator
                    .initializer()
                    .map(|init| NodePtr::new(ctx.file, init.syntax())),
            });
        }
    }

    ctx.classes[slot].methods = methods;
    ctx.classes[slot].fields = fields;

    for nested in class.nested_classes() {
        extract_class(ctx, &nested, Some((id, kind)));
    }
}

fn is_interface_like(kind: ClassKind) -> bool {
    matches!(kind, ClassKind::Interface | ClassKind::Annotation)
}

fn visibility(modifiers: Option<&Modifiers>, default_public: bool) -> Visibility {
    let Some(modifiers) = modifiers else {
        return if default_public {
            Visibility::Public
        } else {
            Visibility::Package
        };
    };
    if modifiers.is_public() {
        Visibility::Public
    } else if modifiers.has(SyntaxKind::PROTECTED_KW) {
        Visibility::Protected
    } else if modifiers.has(SyntaxKind::PRIVATE_KW) {
        Visibility::Private
    } else if default_public {
        Visibility::Public
    } else {
        Visibility::Package
    }
}

fn type_path(ty: &TypeRef, extra_dims: bool) -> String {
    let mut path = ty.path();
    if ty.is_array() || extra_dims {
        path.push_str("[]");
    }
    path
}

fn annotations(modifiers: Option<&Modifiers>, scope: &FileScope) -> Vec<AnnotationData> {
    let Some(modifiers) = modifiers else {
        return Vec::new();
    };
    modifiers
        .annotations()
        .filter_map(|annotation| {
            let written = annotation.name()?.to_dotted();
            let qualified_name = if written.contains('.') {
                Some(SmolStr::new(&written))
            } else {
                scope.single_type_import(&written).map(SmolStr::new)
            };
            let args = annotation
                .args()
                .filter_map(|arg| {
                    let key = arg
                        .name()
                        .and_then(|n| n.text())
                        .unwrap_or_else(|| "value".to_string());
                    Some((SmolStr::new(key), attribute_value(&arg.value()?)))
                })
                .collect();
            Some(AnnotationData {
                name: written.into(),
                qualified_name,
                args,
            })
        })
        .collect()
}

fn attribute_value(value: &AnnotationValue) -> AttributeValue {
    match value {
        AnnotationValue::Expr(Expr::Literal(literal)) => literal
            .string_value()
            .map(AttributeValue::String)
            .unwrap_or(AttributeValue::Other),
        AnnotationValue::Expr(Expr::Paren(paren)) => match paren.inner() {
            Some(inner) => attribute_value(&AnnotationValue::Expr(inner)),
            None => AttributeValue::Other,
        },
        AnnotationValue::Array(_) => {
            AttributeValue::Array(value.elements().iter().map(attribute_value).collect())
        }
        _ => AttributeValue::Other,
    }
}
