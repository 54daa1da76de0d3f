// ============================================================================
// domain/templates.rs - MODULE FILE TEMPLATE TABLE
// ============================================================================

//! The seven per-module file bodies as a data-driven table.
//!
//! Each [`FileKind`] maps to one template function of the identifier pair
//! `(canonical, title)`. The functions are pure text assembly: `canonical`
//! feeds variable- and file-level names, `title` feeds type- and
//! model-level names, and every same-directory import stem matches the
//! file name another function in the table produces. Writing to disk is a
//! separate concern.

use crate::domain::entities::module_file::{FileKind, ModuleFile, ModuleFileSet};
use crate::domain::ident::ModuleIdent;

/// Render every module file for an identifier pair, in kind order.
pub fn render_module_files(ident: &ModuleIdent) -> ModuleFileSet {
    let files = FileKind::ALL
        .iter()
        .map(|kind| {
            ModuleFile::new(
                *kind,
                kind.file_name(ident.canonical()),
                render(*kind, ident.canonical(), ident.title()),
            )
        })
        .collect();

    ModuleFileSet::new(ident.clone(), files)
}

/// The kind -> template-function table.
pub fn render(kind: FileKind, canonical: &str, title: &str) -> String {
    match kind {
        FileKind::Interface => interface(title),
        FileKind::Model => model(canonical, title),
        FileKind::Constant => constant(canonical),
        FileKind::Validation => validation(canonical, title),
        FileKind::Service => service(canonical, title),
        FileKind::Controller => controller(canonical, title),
        FileKind::Route => route(canonical, title),
    }
}

fn interface(title: &str) -> String {
    format!(
        r#"export interface I{title} {{
  isDeleted: boolean;
  // Add your interface properties here
}}
"#
    )
}

fn model(canonical: &str, title: &str) -> String {
    format!(
        r#"import {{ model, Schema }} from 'mongoose';
import {{ I{title} }} from './{canonical}.interface';

const {canonical}Schema = new Schema<I{title}>(
  {{
    // Add your schema fields here
    isDeleted: {{
      type: Boolean,
      default: false,
    }},
  }},
  {{
    timestamps: true,
    toJSON: {{
      virtuals: true,
    }},
  }},
);

// pre save middleware/hook
{canonical}Schema.pre('save', async function (next) {{
  next();
}});

// post save middleware/hook
{canonical}Schema.post('save', function (doc, next) {{
  next();
}});

{canonical}Schema.pre('updateOne', async function (next) {{
  next();
}});
export const {title} = model<I{title}>('{title}', {canonical}Schema);
"#
    )
}

fn constant(canonical: &str) -> String {
    format!(
        r#"export const {canonical}SearchableFields = [];
export const {canonical}FilterableFields = [];
"#
    )
}

fn validation(canonical: &str, title: &str) -> String {
    format!(
        r#"import {{ z }} from 'zod';

const create{title}Schema = z.object({{
  body: z.object({{
    // Add your validation schema here
  }}),
}});

const update{title}Schema = z.object({{
  body: z.object({{
    // Add your validation schema here
  }}),
}});

export const {canonical}Validations = {{
  create{title}Schema,
  update{title}Schema,
}};
"#
    )
}

fn service(canonical: &str, title: &str) -> String {
    format!(
        r#"import {{ I{title} }} from './{canonical}.interface';
import {{ {title} }} from './{canonical}.model';

const createOneIntoDB = async (payload: I{title}): Promise<I{title}> => {{
  const result = await {title}.create(payload);
  return result;
}};

const getAllFromDB = async (): Promise<I{title}[]> => {{
  const result = await {title}.find();
  return result;
}};

const getOneFromDB = async (id: string): Promise<I{title} | null> => {{
  const result = await {title}.findById(id);
  return result;
}};

const updateOneIntoDB = async (
  id: string,
  payload: Partial<I{title}>
): Promise<I{title} | null> => {{
  const result = await {title}.findByIdAndUpdate(id, payload, {{ new: true }});
  return result;
}};

const deleteOneFromDB = async (id: string): Promise<I{title} | null> => {{
  const result = await {title}.findByIdAndUpdate(
    id,
    {{ isDeleted: true }},
    {{ new: true }},
  );
  return result;
}};

export const {canonical}Services = {{
  createOneIntoDB,
  getAllFromDB,
  getOneFromDB,
  updateOneIntoDB,
  deleteOneFromDB,
}};
"#
    )
}

fn controller(canonical: &str, title: &str) -> String {
    format!(
        r#"import httpStatus from 'http-status';
import catchAsync from '../../utils/catchAsync';
import sendResponse from '../../utils/sendResponse';
import {{ {canonical}Services }} from './{canonical}.service';

const createOne = catchAsync(async (req, res) => {{
  const result = await {canonical}Services.createOneIntoDB(req.body);
  sendResponse(res, {{
    statusCode: httpStatus.OK,
    success: true,
    message: '{title} created successfully',
    data: result,
  }});
}});

const getAll = catchAsync(async (req, res) => {{
  const result = await {canonical}Services.getAllFromDB();
  sendResponse(res, {{
    statusCode: httpStatus.OK,
    success: true,
    message: '{title}s retrieved successfully',
    data: result,
  }});
}});

const getOne = catchAsync(async (req, res) => {{
  const result = await {canonical}Services.getOneFromDB(req.params.id);
  sendResponse(res, {{
    statusCode: httpStatus.OK,
    success: true,
    message: '{title} retrieved successfully',
    data: result,
  }});
}});

const updateOne = catchAsync(async (req, res) => {{
  const result = await {canonical}Services.updateOneIntoDB(req.params.id, req.body);
  sendResponse(res, {{
    statusCode: httpStatus.OK,
    success: true,
    message: '{title} updated successfully',
    data: result,
  }});
}});

const deleteOne = catchAsync(async (req, res) => {{
  const result = await {canonical}Services.deleteOneFromDB(req.params.id);
  sendResponse(res, {{
    statusCode: httpStatus.OK,
    success: true,
    message: '{title} deleted successfully',
    data: result,
  }});
}});

export const {canonical}Controllers = {{
  createOne,
  getAll,
  getOne,
  updateOne,
  deleteOne,
}};
"#
    )
}

fn route(canonical: &str, title: &str) -> String {
    format!(
        r#"import express from 'express';
import validateRequest from '../../middlewares/validateRequest';
import {{ {canonical}Controllers }} from './{canonical}.controller';
import {{ {canonical}Validations }} from './{canonical}.validation';

const router = express.Router();

router.post(
  '/create',
  validateRequest({canonical}Validations.create{title}Schema),
  {canonical}Controllers.createOne,
);

router.get('/', {canonical}Controllers.getAll);
router.get('/:id', {canonical}Controllers.getOne);

router.patch(
  '/:id',
  validateRequest({canonical}Validations.update{title}Schema),
  {canonical}Controllers.updateOne,
);

router.delete('/:id', {canonical}Controllers.deleteOne);

export const {canonical}Routes = router;
"#
    )
}
