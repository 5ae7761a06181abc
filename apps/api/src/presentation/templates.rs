// HTML page templates. Placeholders in `{braces}` are substituted by `presentation::render_*`.

pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #1f1f1f; }
  h1 { font-size: 1.8rem; }
  h2 { font-size: 1.2rem; margin-top: 2rem; }
  .progress { background: #eee; border-radius: 5px; height: 14px; }
  .progress > div { background: #2e7d32; height: 14px; border-radius: 5px; }
  .chart-row { display: flex; align-items: center; margin: 4px 0; }
  .chart-label { width: 14rem; font-size: 0.9rem; }
  .chart-bar { background: #4c78a8; height: 18px; }
  .chart-value { margin-left: 0.5rem; font-size: 0.85rem; }
  .primary { background: #e8f5e9; padding: 0.75rem; border-radius: 5px; font-weight: bold; }
  .info { background: #e3f2fd; padding: 0.75rem; border-radius: 5px; }
  .grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.5rem; }
  .skills { display: grid; grid-template-columns: repeat(5, 1fr); gap: 0.25rem; }
  .skills span { background: #f5f5f5; padding: 4px; border-radius: 4px; text-align: center; font-size: 0.9rem; }
  a.button { display: block; background: #1f1f1f; color: white; padding: 8px; border-radius: 5px; font-weight: bold; text-align: center; text-decoration: none; margin-bottom: 5px; }
</style>
</head>
<body>
<h1>Resume Screening</h1>
{body}
</body>
</html>
"#;

pub const UPLOAD_FORM: &str = r#"<p>Upload a resume to see its predicted role and skill suggestions.</p>
<form action="/screen" method="post" enctype="multipart/form-data">
  <input type="file" name="file" accept=".pdf,.docx,.txt" required>
  <button type="submit">Screen resume</button>
</form>
"#;

pub const ATS_SECTION: &str = r#"<h2>ATS Friendliness Score</h2>
<div class="progress"><div style="width: {score}%"></div></div>
<p>Your resume is <strong>{score}% ATS-friendly</strong>.</p>
<p class="info">A higher score means your resume is more likely to be parsed correctly by Applicant Tracking Systems (ATS).</p>
"#;

pub const CHART_ROW: &str = r#"<div class="chart-row"><span class="chart-label">{role}</span><div class="chart-bar" style="width: {width}%" title="{role}: {percent}%"></div><span class="chart-value">{percent}%</span></div>
"#;
