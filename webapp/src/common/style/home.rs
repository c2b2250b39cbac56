pub const GALLERY_STYLES: &str = r#"
/* Hero */
.hero {
  padding: var(--space-12) var(--space-4);
  text-align: center;
  color: white;
  background: linear-gradient(135deg, var(--primary), var(--accent));
}

.hero-title {
  font-size: 2.75rem;
  font-weight: 700;
}

.hero-subtitle {
  font-size: 1.25rem;
  opacity: 0.9;
}

/* Category tiles */
.categories-section {
  padding: var(--space-12) var(--space-6);
}

.category-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: var(--space-6);
}

.category-card {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-6);
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.category-card:hover {
  transform: translateY(-2px);
  box-shadow: var(--shadow-md);
}

.category-icon {
  font-size: 2.5rem;
}

.category-info p {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

/* Gallery */
.gallery-view {
  padding: var(--space-6);
}

.gallery-header {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

.tabs {
  display: flex;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
}

.tab-btn {
  padding: var(--space-2) var(--space-6);
  border: 1px solid var(--primary);
  border-radius: var(--radius-md);
  background: none;
  color: var(--primary);
  cursor: pointer;
}

.tab-btn.active {
  background-color: var(--primary);
  color: white;
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: var(--space-4);
}

.gallery-item {
  aspect-ratio: 1;
  overflow: hidden;
  border-radius: var(--radius-md);
  background-color: var(--neutral-200);
  cursor: pointer;
}

.gallery-item img,
.gallery-item video {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.empty-gallery {
  grid-column: 1 / -1;
  padding: var(--space-12);
  text-align: center;
  color: var(--text-secondary);
}

/* Admin */
.admin-panel {
  max-width: 640px;
  margin: 0 auto;
  padding: var(--space-8) var(--space-6);
}

.admin-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-6);
}

.upload-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  padding: var(--space-6);
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
}

.upload-form select,
.upload-form input[type=file] {
  padding: var(--space-2);
  border: 1px solid var(--neutral-400);
  border-radius: var(--radius-md);
}

.file-preview img,
.file-preview video {
  max-width: 100%;
  max-height: 300px;
  border-radius: var(--radius-md);
}

.upload-status {
  padding: var(--space-3);
  border-radius: var(--radius-md);
  background-color: var(--neutral-200);
}

.upload-status.success {
  color: var(--success);
}

.upload-status.error {
  color: var(--error);
}
"#;
