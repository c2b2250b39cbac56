pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  border: none;
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) ease-in-out;
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-primary:hover:not(:disabled) {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--neutral-200);
  color: var(--text-primary);
}

/* Header */
.app-header {
  position: sticky;
  top: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-3) var(--space-6);
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

.logo {
  font-size: 1.25rem;
  font-weight: 600;
  cursor: pointer;
}

.hamburger {
  display: flex;
  flex-direction: column;
  gap: 4px;
  background: none;
  border: none;
  cursor: pointer;
}

.hamburger span {
  width: 24px;
  height: 3px;
  background-color: var(--text-primary);
  transition: transform var(--transition-fast);
}

.hamburger.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.hamburger.active span:nth-child(2) { opacity: 0; }
.hamburger.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

.mobile-menu {
  position: absolute;
  right: var(--space-6);
  top: 100%;
  display: flex;
  flex-direction: column;
  min-width: 180px;
  background-color: var(--surface);
  border-radius: var(--radius-md);
  box-shadow: var(--shadow-md);
}

.mobile-menu button {
  padding: var(--space-3) var(--space-4);
  background: none;
  border: none;
  text-align: left;
  cursor: pointer;
}

.mobile-menu button:hover {
  background-color: var(--neutral-200);
}

/* Modals */
.modal {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: rgba(0, 0, 0, 0.8);
}

.modal-content {
  position: relative;
  max-width: 90vw;
  max-height: 90vh;
}

.modal-content img,
.modal-content video {
  max-width: 90vw;
  max-height: 85vh;
  border-radius: var(--radius-md);
}

.modal-close {
  position: absolute;
  top: -2.5rem;
  right: 0;
  color: white;
  font-size: 2rem;
  cursor: pointer;
}

.login-box {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  width: min(360px, 90vw);
  padding: var(--space-8);
  background-color: var(--surface);
  border-radius: var(--radius-lg);
}

.login-box input {
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--neutral-400);
  border-radius: var(--radius-md);
}

.login-box .modal-close {
  top: var(--space-2);
  right: var(--space-4);
  color: var(--text-secondary);
  font-size: 1.5rem;
}

.forgot-link {
  color: var(--primary);
  font-size: 0.875rem;
  cursor: pointer;
}
"#;
